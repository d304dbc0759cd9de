use crate::domain::cancellation::{CancellationToken, CancellationTokenSource};
use crate::domain::models::{ExtensionId, GalleryQuery, InstalledExtension};
use crate::domain::services::{
    ExtensionGallery, ExtensionManagement, ExtensionsViewPaneContainer, Viewlet, ViewletService,
    EXTENSIONS_VIEWLET_ID,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub struct PanelEntry {
    pub id: ExtensionId,
    pub title: String,
    pub version: String,
    pub description: String,
    pub installed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelState {
    pub visible: bool,
    pub focused: bool,
    pub search: String,
    pub loading: bool,
    pub entries: Vec<PanelEntry>,
    pub total: usize,
    pub error: Option<String>,
    /// Bumped on every search; lets late results recognise they are stale.
    pub generation: u64,
}

/// The extensions management pane. Searches run in the background and only
/// the latest one may publish its results.
pub struct ExtensionsPanel {
    gallery: Arc<dyn ExtensionGallery>,
    extensions: Arc<dyn ExtensionManagement>,
    page_size: usize,
    state: Mutex<PanelState>,
    pending: Mutex<Option<CancellationTokenSource>>,
}

impl ExtensionsPanel {
    pub fn new(
        gallery: Arc<dyn ExtensionGallery>,
        extensions: Arc<dyn ExtensionManagement>,
        page_size: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            gallery,
            extensions,
            page_size,
            state: Mutex::new(PanelState::default()),
            pending: Mutex::new(None),
        })
    }

    fn state(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> PanelState {
        self.state().clone()
    }

    pub fn show(&self) {
        self.state().visible = true;
    }

    pub fn hide(&self) {
        let mut state = self.state();
        state.visible = false;
        state.focused = false;
    }

    /// Re-run the current search, e.g. after an install changed the ledger.
    pub fn refresh(self: &Arc<Self>) {
        let search = self.state().search.clone();
        self.start_search(search);
    }

    fn start_search(self: &Arc<Self>, text: String) {
        let source = CancellationTokenSource::new();
        let token = source.token();
        if let Some(previous) = self
            .pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .replace(source)
        {
            previous.cancel();
        }

        let generation = {
            let mut state = self.state();
            state.search = text.clone();
            state.loading = true;
            state.error = None;
            state.generation += 1;
            state.generation
        };

        let panel = self.clone();
        tokio::spawn(async move {
            let outcome = panel.run_search(&text, token.clone()).await;
            if token.is_cancellation_requested() {
                return;
            }
            let mut state = panel.state();
            if state.generation != generation {
                return;
            }
            state.loading = false;
            match outcome {
                Ok((entries, total)) => {
                    state.entries = entries;
                    state.total = total;
                }
                Err(e) => {
                    tracing::warn!("extensions search for {text:?} failed: {e:#}");
                    state.entries.clear();
                    state.total = 0;
                    state.error = Some(format!("{e:#}"));
                }
            }
        });
    }

    async fn run_search(
        &self,
        text: &str,
        token: CancellationToken,
    ) -> Result<(Vec<PanelEntry>, usize)> {
        let installed = self.extensions.installed().await?;
        let trimmed = text.trim();

        if trimmed.is_empty() || trimmed == "@installed" {
            let entries: Vec<PanelEntry> = installed.iter().map(installed_entry).collect();
            let total = entries.len();
            return Ok((entries, total));
        }

        let query = match trimmed.strip_prefix("@id:") {
            Some(id) => GalleryQuery::by_name(id.trim()),
            None => GalleryQuery::by_text(trimmed, self.page_size),
        };
        let result = self.gallery.query(query, token).await?;
        let entries = result
            .first_page
            .iter()
            .map(|ext| {
                let id = ext.identifier();
                PanelEntry {
                    installed: installed.iter().any(|i| i.identifier.matches(&id.0)),
                    title: ext.title().to_string(),
                    version: ext.version.clone(),
                    description: ext.description.clone(),
                    id,
                }
            })
            .collect();
        Ok((entries, result.total))
    }
}

fn installed_entry(installed: &InstalledExtension) -> PanelEntry {
    PanelEntry {
        id: installed.identifier.clone(),
        title: installed.identifier.0.clone(),
        version: installed.version.clone(),
        description: String::new(),
        installed: true,
    }
}

/// Pane handle handed out through the viewlet. Wraps the shared panel so the
/// trait methods can spawn work.
struct PanelPane(Arc<ExtensionsPanel>);

impl ExtensionsViewPaneContainer for PanelPane {
    fn search(&self, text: &str) {
        self.0.start_search(text.to_string());
    }

    fn focus(&self) {
        self.0.state().focused = true;
    }
}

pub struct ExtensionsViewlet {
    panel: Arc<ExtensionsPanel>,
}

impl Viewlet for ExtensionsViewlet {
    fn view_pane_container(&self) -> Option<Arc<dyn ExtensionsViewPaneContainer>> {
        Some(Arc::new(PanelPane(self.panel.clone())))
    }
}

/// Hosts the single extensions viewlet; any other id is unknown.
pub struct LocalViewletService {
    panel: Arc<ExtensionsPanel>,
}

impl LocalViewletService {
    pub fn new(panel: Arc<ExtensionsPanel>) -> Self {
        Self { panel }
    }
}

#[async_trait]
impl ViewletService for LocalViewletService {
    async fn open_viewlet(&self, id: &str, focus: bool) -> Option<Arc<dyn Viewlet>> {
        if id != EXTENSIONS_VIEWLET_ID {
            tracing::debug!("unknown viewlet {id:?}");
            return None;
        }
        self.panel.show();
        if focus {
            self.panel.state().focused = true;
        }
        Some(Arc::new(ExtensionsViewlet {
            panel: self.panel.clone(),
        }))
    }
}
