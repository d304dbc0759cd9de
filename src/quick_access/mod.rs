//! Prefix-driven quick access: the palette hands everything after a
//! registered prefix to the provider that owns it.

pub mod extensions;
pub mod registry;

use crate::domain::cancellation::CancellationToken;
use crate::domain::models::GalleryExtension;
use async_trait::async_trait;

pub use registry::QuickAccessRegistry;

/// What happens when a pick item is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum PickAction {
    /// Open the extensions panel searched with free text.
    SearchExtensions(String),
    /// Open the panel on `@id:<name>` and install the matched extension.
    InstallExtension {
        extension: GalleryExtension,
        name: String,
    },
    /// Open the extensions panel with no search.
    ManageExtensions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickItem {
    pub label: String,
    pub action: Option<PickAction>,
}

impl PickItem {
    pub fn informational(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }

    pub fn runnable(label: impl Into<String>, action: PickAction) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
        }
    }

    pub fn is_runnable(&self) -> bool {
        self.action.is_some()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuickAccessProvider: Send + Sync {
    fn prefix(&self) -> &'static str;

    /// Produce the rows for `filter` (the input with the prefix removed).
    /// A superseded call should return an empty list.
    async fn get_picks(&self, filter: &str, token: CancellationToken) -> Vec<PickItem>;

    /// Run the action attached to an accepted row. Failures are reported by
    /// the provider itself, never returned.
    async fn accept(&self, action: PickAction);
}
