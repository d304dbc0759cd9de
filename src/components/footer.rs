use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Footer<'_, '_> {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.last_error.is_some() && self.state.mode == AppMode::Normal {
            return &[("Esc", "dismiss")];
        }
        match self.state.mode {
            AppMode::Palette => &[("Enter", "run"), ("↑/↓", "select"), ("Esc", "close")],
            AppMode::Normal => &[
                (":", "quick access"),
                ("i", "install"),
                ("j/k", "move"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, desc) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), self.theme.key_binding));
            spans.push(Span::raw(format!("{desc} ")));
        }

        if self.state.active_tasks > 0 {
            spans.push(Span::styled(" working... ", self.theme.status_info));
        }

        if let Some(err) = &self.state.last_error {
            spans.push(Span::styled(
                format!(" [{}] {}", err.timestamp.format("%H:%M:%S"), err.message),
                self.theme.status_error,
            ));
        } else if let Some(msg) = &self.state.status_message {
            spans.push(Span::styled(format!(" {msg}"), self.theme.status_info));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
