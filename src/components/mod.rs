pub mod extensions_panel;
pub mod footer;
pub mod helpers;
pub mod quick_access;
