use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_active: Style,

    pub extension_title: Style,
    pub extension_id: Style,
    pub extension_version: Style,
    pub installed_badge: Style,

    pub footer: Style,
    pub key_binding: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            header_active: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            extension_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            extension_id: Style::default().fg(Color::Cyan),
            extension_version: Style::default().fg(Color::Rgb(130, 130, 130)),
            installed_badge: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),

            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(Color::Rgb(200, 200, 200)),
            dimmed: Style::default().add_modifier(Modifier::DIM),
        }
    }
}
