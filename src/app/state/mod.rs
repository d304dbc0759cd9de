use crate::infrastructure::workbench::PanelState;
use ratatui::widgets::ListState;

pub mod error;
pub mod input;
pub mod palette;

pub use error::ErrorState;
pub use input::AppTextArea;
pub use palette::PaletteState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,  // Browsing the extensions panel
    Palette, // Quick access input is open
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub active_tasks: usize,

    // --- Quick Access ---
    pub palette: Option<PaletteState<'a>>,
    /// Survives palette close so every lookup gets a unique generation.
    pub palette_generation: u64,

    // --- Extensions Panel (mirrored from the workbench before each draw) ---
    pub panel: PanelState,
    pub panel_list: ListState,
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            active_tasks: 0,
            palette: None,
            palette_generation: 0,
            panel: PanelState::default(),
            panel_list: ListState::default(),
        }
    }
}

impl AppState<'_> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync_panel(&mut self, panel: PanelState) {
        let len = panel.entries.len();
        self.panel = panel;
        match self.panel_list.selected() {
            _ if len == 0 => self.panel_list.select(None),
            Some(i) if i >= len => self.panel_list.select(Some(len - 1)),
            None => self.panel_list.select(Some(0)),
            Some(_) => {}
        }
    }
}
