use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};
use crate::app::state::PaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

const MAX_VISIBLE_PICKS: u16 = 8;

pub struct QuickAccessModal<'a, 'b> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState<'b>,
}

impl Widget for QuickAccessModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = (self.state.items.len() as u16).clamp(1, MAX_VISIBLE_PICKS);
        let modal_area = centered_rect_fixed_height(60, rows + 4, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" QUICK ACCESS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Picks
            ])
            .split(inner_area);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.key_binding),
            Span::styled(self.state.query(), self.theme.list_item),
            Span::styled("_", self.theme.list_item.add_modifier(Modifier::SLOW_BLINK)),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        if self.state.items.is_empty() {
            let text = if self.state.loading {
                "  Searching..."
            } else {
                "  No picks."
            };
            let line = Line::from(Span::styled(text, self.theme.dimmed));
            buf.set_line(layout[2].x, layout[2].y, &line, layout[2].width);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = i == self.state.selected_index;
                let style = if !item.is_runnable() {
                    self.theme.dimmed
                } else if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let marker = if selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(item.label.as_str(), style),
                ]))
            })
            .collect();
        List::new(items).render(layout[2], buf);
    }
}
