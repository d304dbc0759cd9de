use crate::infrastructure::workbench::PanelState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct ExtensionsPanelView<'a> {
    pub theme: &'a Theme,
    pub state: &'a PanelState,
}

impl StatefulWidget for ExtensionsPanelView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        let title = if self.state.search.is_empty() {
            " EXTENSIONS: INSTALLED ".to_string()
        } else {
            format!(" EXTENSIONS: {} ", self.state.search)
        };
        let border_style = if self.state.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(Span::styled(title, self.theme.header_active))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        if let Some(error) = &self.state.error {
            Paragraph::new(Span::styled(format!(" {error}"), self.theme.status_error))
                .block(block)
                .render(area, buf);
            return;
        }

        if self.state.entries.is_empty() {
            let text = if self.state.loading {
                " Loading..."
            } else {
                " No extensions found."
            };
            Paragraph::new(Span::styled(text, self.theme.dimmed))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .map(|entry| {
                let mut header = vec![
                    Span::styled(entry.title.as_str(), self.theme.extension_title),
                    Span::raw("  "),
                    Span::styled(entry.id.0.as_str(), self.theme.extension_id),
                    Span::raw(" "),
                    Span::styled(entry.version.as_str(), self.theme.extension_version),
                ];
                if entry.installed {
                    header.push(Span::styled("  [installed]", self.theme.installed_badge));
                }
                ListItem::new(vec![
                    Line::from(header),
                    Line::from(Span::styled(
                        format!("  {}", entry.description),
                        self.theme.dimmed,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.list_selected);
        StatefulWidget::render(list, area, buf, list_state);
    }
}
