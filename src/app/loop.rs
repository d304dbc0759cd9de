use crate::app::{
    action::Action, handler::QuickAccessHost, input::map_event_to_action, reducer, state::AppState,
    ui,
};
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    host: QuickAccessHost,
    action_tx: mpsc::Sender<Action>,
    action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, host, action_tx, action_rx, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut host: QuickAccessHost,
    action_tx: mpsc::Sender<Action>,
    mut action_rx: mpsc::Receiver<Action>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let theme = Theme::default();
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        app_state.sync_panel(host.panel().snapshot());
        terminal.draw(|f| {
            ui::draw(f, &mut app_state, &theme);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state),
                Some(Err(e)) => return Err(e.into()),
                None => Some(Action::Quit),
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                host.handle_command(cmd, action_tx.clone());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
