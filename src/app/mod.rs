pub mod action;
pub mod command;
pub mod handler;
pub mod input;
pub mod r#loop;
pub mod notifications;
pub mod reducer;
pub mod state;
pub mod ui;
