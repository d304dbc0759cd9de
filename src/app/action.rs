use crate::quick_access::PickItem;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Panel Navigation ---
    SelectNext,
    SelectPrev,

    // --- Quick Access Palette ---
    OpenPalette(String),   // Open the palette pre-filled with a prefix
    PaletteInput(KeyEvent), // Keystroke routed to the palette input
    PaletteNext,           // Next pick
    PalettePrev,           // Previous pick
    PaletteAccept,         // Run the selected pick
    ClosePalette,          // ESC
    DismissError,

    // --- Async Results ---
    PicksLoaded {
        generation: u64,
        prefix: Option<&'static str>,
        items: Vec<PickItem>,
    },
    PickCompleted,
    ErrorOccurred(String),
    StatusMessage(String),
}
