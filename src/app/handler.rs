use crate::app::{action::Action, command::Command};
use crate::domain::cancellation::CancellationTokenSource;
use crate::infrastructure::workbench::ExtensionsPanel;
use crate::quick_access::{PickAction, QuickAccessRegistry};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the reducer's commands against the quick access providers.
///
/// Exactly one lookup is live at a time: starting a new one cancels the
/// token of the previous, and its results carry a generation the reducer
/// checks before showing them.
pub struct QuickAccessHost {
    registry: QuickAccessRegistry,
    panel: Arc<ExtensionsPanel>,
    pending: Option<CancellationTokenSource>,
}

impl QuickAccessHost {
    pub fn new(registry: QuickAccessRegistry, panel: Arc<ExtensionsPanel>) -> Self {
        Self {
            registry,
            panel,
            pending: None,
        }
    }

    pub fn panel(&self) -> &Arc<ExtensionsPanel> {
        &self.panel
    }

    fn cancel_pending(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
    }

    pub fn handle_command(&mut self, command: Command, tx: mpsc::Sender<Action>) {
        match command {
            Command::LoadPicks { generation, input } => {
                self.cancel_pending();
                let source = CancellationTokenSource::new();
                let (prefix, picks) = self.registry.picks(&input, source.token());
                self.pending = Some(source);
                tokio::spawn(async move {
                    let items = picks.await;
                    let _ = tx
                        .send(Action::PicksLoaded {
                            generation,
                            prefix,
                            items,
                        })
                        .await;
                });
            }
            Command::CancelPicks => self.cancel_pending(),
            Command::RunPick { prefix, action } => {
                let Some(provider) = self.registry.provider(prefix) else {
                    tracing::warn!("no quick access provider for {prefix:?}");
                    let _ = tx.try_send(Action::PickCompleted);
                    return;
                };
                let panel = self.panel.clone();
                tokio::spawn(async move {
                    let installs = matches!(action, PickAction::InstallExtension { .. });
                    provider.accept(action).await;
                    if installs {
                        panel.refresh();
                    }
                    let _ = tx.send(Action::PickCompleted).await;
                });
            }
        }
    }
}
