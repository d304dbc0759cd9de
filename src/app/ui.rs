use crate::app::state::AppState;
use crate::components::extensions_panel::ExtensionsPanelView;
use crate::components::footer::Footer;
use crate::components::quick_access::QuickAccessModal;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState, theme: &Theme) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" EXTPAL ", theme.header_logo),
        Span::styled(
            format!(" {} shown ", app_state.panel.entries.len()),
            theme.header,
        ),
    ]))
    .style(theme.header);
    f.render_widget(header, layout.header);

    // --- Body ---
    if app_state.panel.visible {
        let view = ExtensionsPanelView {
            theme,
            state: &app_state.panel,
        };
        f.render_stateful_widget(view, layout.body, &mut app_state.panel_list);
    } else {
        let welcome = Paragraph::new(vec![
            Line::raw(""),
            Line::from(vec![
                Span::raw("  Press "),
                Span::styled(":", theme.key_binding),
                Span::raw(" and type "),
                Span::styled("ext install <publisher.name>", theme.extension_id),
                Span::raw(" to install an extension,"),
            ]),
            Line::from(vec![
                Span::raw("  or "),
                Span::styled("ext ", theme.extension_id),
                Span::raw(" to manage installed extensions."),
            ]),
        ])
        .wrap(Wrap { trim: false });
        f.render_widget(welcome, layout.body);
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Quick Access Overlay ---
    if let Some(palette) = &app_state.palette {
        f.render_widget(
            QuickAccessModal {
                theme,
                state: palette,
            },
            f.area(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppMode, AppTextArea, PaletteState};
    use crate::quick_access::extensions::{install_label, INSTALL_PREFIX};
    use crate::quick_access::{PickAction, PickItem};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_palette_renders_pick_labels() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut state = AppState::new();
        state.mode = AppMode::Palette;
        state.palette = Some(PaletteState {
            text_area: AppTextArea::with_text("ext install a.b"),
            prefix: Some(INSTALL_PREFIX),
            items: vec![PickItem::runnable(
                install_label("a.b"),
                PickAction::SearchExtensions("a.b".to_string()),
            )],
            ..PaletteState::default()
        });

        let theme = Theme::default();
        terminal.draw(|f| draw(f, &mut state, &theme)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("QUICK ACCESS"));
        assert!(text.contains("ext install a.b"));
        assert!(text.contains("Press Enter to install extension 'a.b'."));
    }

    #[test]
    fn test_hidden_panel_shows_hint() {
        let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
        let mut state = AppState::new();
        let theme = Theme::default();
        terminal.draw(|f| draw(f, &mut state, &theme)).unwrap();
        assert!(screen(&terminal).contains("ext install <publisher.name>"));
    }

    #[test]
    fn test_footer_shows_status_message() {
        let mut terminal = Terminal::new(TestBackend::new(120, 10)).unwrap();
        let mut state = AppState::new();
        state.status_message = Some("Extension 'a.b' was successfully installed.".to_string());
        let theme = Theme::default();
        terminal.draw(|f| draw(f, &mut state, &theme)).unwrap();
        assert!(screen(&terminal).contains("Extension 'a.b' was successfully installed."));
    }

    #[test]
    fn test_empty_palette_says_no_picks() {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut state = AppState::new();
        state.mode = AppMode::Palette;
        state.palette = Some(PaletteState {
            text_area: AppTextArea::with_text("hello"),
            ..PaletteState::default()
        });
        let theme = Theme::default();
        terminal.draw(|f| draw(f, &mut state, &theme)).unwrap();
        assert!(screen(&terminal).contains("No picks."));
    }
}
