use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crate::quick_access::extensions::MANAGE_PREFIX;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match app_state.mode {
        AppMode::Palette => match key.code {
            KeyCode::Esc => Some(Action::ClosePalette),
            KeyCode::Enter => Some(Action::PaletteAccept),
            KeyCode::Down | KeyCode::Tab => Some(Action::PaletteNext),
            KeyCode::Up | KeyCode::BackTab => Some(Action::PalettePrev),
            _ => Some(Action::PaletteInput(key)),
        },
        AppMode::Normal => {
            if app_state.last_error.is_some() && key.code == KeyCode::Esc {
                return Some(Action::DismissError);
            }
            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
                (KeyCode::Char('p'), KeyModifiers::CONTROL) | (KeyCode::Char(':'), _) => {
                    Some(Action::OpenPalette(MANAGE_PREFIX.to_string()))
                }
                (KeyCode::Char('i'), KeyModifiers::NONE) => Some(Action::OpenPalette(
                    crate::quick_access::extensions::INSTALL_PREFIX.to_string(),
                )),
                (KeyCode::Char('q'), _) => Some(Action::Quit),
                (KeyCode::Char('j') | KeyCode::Down, _) => Some(Action::SelectNext),
                (KeyCode::Char('k') | KeyCode::Up, _) => Some(Action::SelectPrev),
                _ => None,
            }
        }
    }
}
