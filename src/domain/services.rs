//! Capabilities the quick-access providers depend on. Each is injected
//! through a constructor so tests can substitute mocks.

use crate::domain::cancellation::CancellationToken;
use crate::domain::models::{GalleryExtension, GalleryQuery, InstalledExtension, QueryResult};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub const EXTENSIONS_VIEWLET_ID: &str = "workbench.view.extensions";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionGallery: Send + Sync {
    // Implementations should stop early and return `Cancelled` once the token fires
    async fn query(&self, query: GalleryQuery, token: CancellationToken) -> Result<QueryResult>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionManagement: Send + Sync {
    async fn install_from_gallery(&self, extension: GalleryExtension) -> Result<()>;
    async fn installed(&self) -> Result<Vec<InstalledExtension>>;
}

/// Content of the extensions panel that accepts a search and keyboard focus.
#[cfg_attr(test, mockall::automock)]
pub trait ExtensionsViewPaneContainer: Send + Sync {
    fn search(&self, text: &str);
    fn focus(&self);
}

#[cfg_attr(test, mockall::automock)]
pub trait Viewlet: Send + Sync {
    fn view_pane_container(&self) -> Option<Arc<dyn ExtensionsViewPaneContainer>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewletService: Send + Sync {
    async fn open_viewlet(&self, id: &str, focus: bool) -> Option<Arc<dyn Viewlet>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait NotificationService: Send + Sync {
    fn error(&self, message: String);
    fn info(&self, message: String);
}

#[cfg_attr(test, mockall::automock)]
pub trait LogService: Send + Sync {
    fn error(&self, error: &anyhow::Error);
}

/// Production [`LogService`] backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl LogService for TracingLog {
    fn error(&self, error: &anyhow::Error) {
        tracing::error!("{error:#}");
    }
}
