use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use extpal::app::{
    handler::QuickAccessHost, notifications::ChannelNotifications, r#loop::run_loop,
    state::AppState,
};
use extpal::config::Config;
use extpal::domain::services::{ExtensionGallery, ExtensionManagement, TracingLog, ViewletService};
use extpal::infrastructure::{
    gallery::TomlGallery,
    install::LocalExtensionManagement,
    workbench::{ExtensionsPanel, LocalViewletService},
};
use extpal::quick_access::{
    extensions::{InstallExtensionQuickAccessProvider, ManageExtensionsQuickAccessProvider},
    QuickAccessRegistry,
};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Configure everything before touching the terminal so a failure here
    // doesn't leave it in raw mode.
    let config = Config::load();
    extpal::logging::init(&config.log_path)?;
    tracing::info!(gallery = ?config.gallery_path, "starting extpal");

    let (action_tx, action_rx) = mpsc::channel(100);

    let gallery: Arc<dyn ExtensionGallery> = Arc::new(TomlGallery::new(
        config.gallery_path.clone(),
        Duration::from_millis(config.lookup_delay_ms),
    ));
    let extensions: Arc<dyn ExtensionManagement> =
        Arc::new(LocalExtensionManagement::new(config.installed_path.clone()));
    let panel = ExtensionsPanel::new(gallery.clone(), extensions.clone(), config.search_page_size);
    let viewlets: Arc<dyn ViewletService> = Arc::new(LocalViewletService::new(panel.clone()));

    let mut registry = QuickAccessRegistry::new();
    registry.register(Arc::new(InstallExtensionQuickAccessProvider::new(
        viewlets.clone(),
        gallery,
        extensions,
        Arc::new(ChannelNotifications::new(action_tx.clone())),
        Arc::new(TracingLog),
    )));
    registry.register(Arc::new(ManageExtensionsQuickAccessProvider::new(viewlets)));
    tracing::debug!(prefixes = ?registry.prefixes(), "quick access providers registered");

    let host = QuickAccessHost::new(registry, panel);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, AppState::new(), host, action_tx, action_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}
