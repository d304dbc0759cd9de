use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, AppTextArea, ErrorState, PaletteState},
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {}
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Panel Navigation ---
        Action::SelectNext => {
            let len = state.panel.entries.len();
            if len > 0 {
                let i = match state.panel_list.selected() {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                };
                state.panel_list.select(Some(i));
            }
        }
        Action::SelectPrev => {
            let len = state.panel.entries.len();
            if len > 0 {
                let i = match state.panel_list.selected() {
                    Some(0) | None => len - 1,
                    Some(i) => i - 1,
                };
                state.panel_list.select(Some(i));
            }
        }

        // --- Quick Access ---
        Action::OpenPalette(initial) => {
            state.mode = AppMode::Palette;
            state.palette = Some(PaletteState {
                text_area: AppTextArea::with_text(&initial),
                ..PaletteState::default()
            });
            return next_lookup(state);
        }
        Action::PaletteInput(key) => {
            let palette = state.palette.as_mut()?;
            let before = palette.query();
            palette.text_area.input(key);
            if palette.query() != before {
                return next_lookup(state);
            }
        }
        Action::PaletteNext => {
            if let Some(palette) = &mut state.palette {
                if !palette.items.is_empty() {
                    palette.selected_index = (palette.selected_index + 1) % palette.items.len();
                }
            }
        }
        Action::PalettePrev => {
            if let Some(palette) = &mut state.palette {
                if !palette.items.is_empty() {
                    palette.selected_index = palette
                        .selected_index
                        .checked_sub(1)
                        .unwrap_or(palette.items.len() - 1);
                }
            }
        }
        Action::PaletteAccept => {
            let palette = state.palette.as_ref()?;
            // Rows from the previous input are stale until the new lookup lands.
            if palette.loading {
                return None;
            }
            let prefix = palette.prefix?;
            // Informational rows keep the palette open.
            let action = palette.selected()?.action.clone()?;
            close_palette(state);
            state.active_tasks += 1;
            return Some(Command::RunPick { prefix, action });
        }
        Action::ClosePalette => {
            close_palette(state);
            return Some(Command::CancelPicks);
        }
        Action::DismissError => {
            state.last_error = None;
        }

        // --- Async Results ---
        Action::PicksLoaded {
            generation,
            prefix,
            items,
        } => {
            let palette = state.palette.as_mut()?;
            if palette.generation != generation {
                return None;
            }
            palette.prefix = prefix;
            palette.selected_index = items.iter().position(|i| i.is_runnable()).unwrap_or(0);
            palette.items = items;
            palette.loading = false;
        }
        Action::PickCompleted => {
            state.active_tasks = state.active_tasks.saturating_sub(1);
        }
        Action::ErrorOccurred(message) => {
            state.last_error = Some(ErrorState::error(message));
        }
        Action::StatusMessage(message) => {
            state.status_message = Some(message);
        }
    }
    None
}

fn next_lookup(state: &mut AppState) -> Option<Command> {
    state.palette_generation += 1;
    let generation = state.palette_generation;
    let palette = state.palette.as_mut()?;
    palette.generation = generation;
    palette.loading = true;
    Some(Command::LoadPicks {
        generation,
        input: palette.query(),
    })
}

fn close_palette(state: &mut AppState) {
    state.mode = AppMode::Normal;
    state.palette = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::GalleryExtension;
    use crate::quick_access::extensions::{search_for_label, type_to_install_label};
    use crate::quick_access::{PickAction, PickItem};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Action {
        Action::PaletteInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
    }

    fn open(state: &mut AppState, text: &str) -> u64 {
        match update(state, Action::OpenPalette(text.to_string())) {
            Some(Command::LoadPicks { generation, input }) => {
                assert_eq!(input, text);
                generation
            }
            other => panic!("expected LoadPicks, got {other:?}"),
        }
    }

    #[test]
    fn test_each_keystroke_starts_a_new_generation() {
        let mut state = AppState::new();
        let first = open(&mut state, "ext install ");
        let cmd = update(&mut state, key('a'));
        assert_eq!(
            cmd,
            Some(Command::LoadPicks {
                generation: first + 1,
                input: "ext install a".to_string()
            })
        );
    }

    #[test]
    fn test_stale_picks_are_discarded() {
        let mut state = AppState::new();
        let stale = open(&mut state, "ext install a.b");
        update(&mut state, key('c'));

        update(
            &mut state,
            Action::PicksLoaded {
                generation: stale,
                prefix: Some("ext install "),
                items: vec![PickItem::runnable(
                    search_for_label("a.b"),
                    PickAction::SearchExtensions("a.b".to_string()),
                )],
            },
        );

        let palette = state.palette.as_ref().unwrap();
        assert!(palette.items.is_empty());
        assert!(palette.loading);
    }

    #[test]
    fn test_current_picks_are_shown() {
        let mut state = AppState::new();
        let generation = open(&mut state, "ext install ");
        update(
            &mut state,
            Action::PicksLoaded {
                generation,
                prefix: Some("ext install "),
                items: vec![PickItem::informational(type_to_install_label())],
            },
        );
        let palette = state.palette.as_ref().unwrap();
        assert!(!palette.loading);
        assert_eq!(palette.items.len(), 1);
    }

    #[test]
    fn test_accept_informational_keeps_palette_open() {
        let mut state = AppState::new();
        let generation = open(&mut state, "ext install ");
        update(
            &mut state,
            Action::PicksLoaded {
                generation,
                prefix: Some("ext install "),
                items: vec![PickItem::informational(type_to_install_label())],
            },
        );
        assert_eq!(update(&mut state, Action::PaletteAccept), None);
        assert_eq!(state.mode, AppMode::Palette);
    }

    #[test]
    fn test_accept_runnable_closes_and_runs() {
        let mut state = AppState::new();
        let generation = open(&mut state, "ext install ms-python.python");
        let action = PickAction::InstallExtension {
            extension: GalleryExtension {
                publisher: "ms-python".to_string(),
                name: "python".to_string(),
                display_name: String::new(),
                version: String::new(),
                description: String::new(),
            },
            name: "ms-python.python".to_string(),
        };
        update(
            &mut state,
            Action::PicksLoaded {
                generation,
                prefix: Some("ext install "),
                items: vec![PickItem::runnable("install", action.clone())],
            },
        );

        let cmd = update(&mut state, Action::PaletteAccept);
        assert_eq!(
            cmd,
            Some(Command::RunPick {
                prefix: "ext install ",
                action
            })
        );
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.palette.is_none());
        assert_eq!(state.active_tasks, 1);
    }

    #[test]
    fn test_accept_is_ignored_while_lookup_is_loading() {
        let mut state = AppState::new();
        let generation = open(&mut state, "ext install a.b");
        let action = PickAction::SearchExtensions("a.b".to_string());
        update(
            &mut state,
            Action::PicksLoaded {
                generation,
                prefix: Some("ext install "),
                items: vec![PickItem::runnable(search_for_label("a.b"), action)],
            },
        );
        update(&mut state, key('c'));

        assert_eq!(update(&mut state, Action::PaletteAccept), None);
        assert_eq!(state.mode, AppMode::Palette);
        assert_eq!(state.active_tasks, 0);
    }

    #[test]
    fn test_status_message_is_recorded() {
        let mut state = AppState::new();
        update(&mut state, Action::StatusMessage("installed".to_string()));
        assert_eq!(state.status_message.as_deref(), Some("installed"));
    }

    #[test]
    fn test_close_cancels_and_late_results_are_ignored() {
        let mut state = AppState::new();
        let generation = open(&mut state, "ext ");
        assert_eq!(update(&mut state, Action::ClosePalette), Some(Command::CancelPicks));
        update(
            &mut state,
            Action::PicksLoaded {
                generation,
                prefix: Some("ext "),
                items: vec![],
            },
        );
        assert!(state.palette.is_none());
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_generation_keeps_increasing_across_reopen() {
        let mut state = AppState::new();
        let first = open(&mut state, "ext ");
        update(&mut state, Action::ClosePalette);
        let second = open(&mut state, "ext ");
        assert!(second > first);
    }

    #[test]
    fn test_error_is_recorded_and_dismissed() {
        let mut state = AppState::new();
        update(&mut state, Action::ErrorOccurred("boom".to_string()));
        assert_eq!(state.last_error.as_ref().unwrap().message, "boom");
        update(&mut state, Action::DismissError);
        assert!(state.last_error.is_none());
    }
}
