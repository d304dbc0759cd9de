use super::{PickAction, PickItem, QuickAccessProvider};
use crate::domain::cancellation::CancellationToken;
use crate::domain::models::{GalleryExtension, GalleryQuery};
use crate::domain::services::{
    ExtensionGallery, ExtensionManagement, LogService, NotificationService, ViewletService,
    EXTENSIONS_VIEWLET_ID,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub const INSTALL_PREFIX: &str = "ext install ";
pub const MANAGE_PREFIX: &str = "ext ";

pub fn type_to_install_label() -> String {
    "Type an extension name to install or search.".to_string()
}

pub fn search_for_label(filter: &str) -> String {
    format!("Press Enter to search for extension '{filter}'.")
}

pub fn install_label(filter: &str) -> String {
    format!("Press Enter to install extension '{filter}'.")
}

pub fn manage_label() -> String {
    "Press Enter to manage your extensions.".to_string()
}

/// Bring the extensions panel to the front and, if its content pane is
/// available, search it for `search` and focus it. Missing pieces are skipped.
pub async fn open_extensions_viewlet(viewlets: &dyn ViewletService, search: &str) {
    let Some(viewlet) = viewlets.open_viewlet(EXTENSIONS_VIEWLET_ID, true).await else {
        tracing::debug!("extensions viewlet unavailable");
        return;
    };
    if let Some(view) = viewlet.view_pane_container() {
        view.search(search);
        view.focus();
    }
}

pub struct InstallExtensionQuickAccessProvider {
    viewlets: Arc<dyn ViewletService>,
    gallery: Arc<dyn ExtensionGallery>,
    extensions: Arc<dyn ExtensionManagement>,
    notifications: Arc<dyn NotificationService>,
    log: Arc<dyn LogService>,
}

impl InstallExtensionQuickAccessProvider {
    pub fn new(
        viewlets: Arc<dyn ViewletService>,
        gallery: Arc<dyn ExtensionGallery>,
        extensions: Arc<dyn ExtensionManagement>,
        notifications: Arc<dyn NotificationService>,
        log: Arc<dyn LogService>,
    ) -> Self {
        Self {
            viewlets,
            gallery,
            extensions,
            notifications,
            log,
        }
    }

    async fn picks_for_extension_id(
        &self,
        filter: &str,
        fallback: PickItem,
        token: CancellationToken,
    ) -> Vec<PickItem> {
        let result = self
            .gallery
            .query(GalleryQuery::by_name(filter), token.clone())
            .await;

        // Checked on both paths: a superseded lookup shows nothing.
        if token.is_cancellation_requested() {
            return Vec::new();
        }

        match result {
            Ok(result) => match result.first_page.into_iter().next() {
                Some(extension) => vec![PickItem::runnable(
                    install_label(filter),
                    PickAction::InstallExtension {
                        extension,
                        name: filter.to_string(),
                    },
                )],
                None => vec![fallback],
            },
            Err(e) => {
                self.log.error(&e);
                vec![fallback]
            }
        }
    }

    async fn install_extension(&self, extension: GalleryExtension, name: &str) {
        if let Err(e) = self.try_install(extension, name).await {
            self.notifications.error(format!("{e:#}"));
        }
    }

    async fn try_install(&self, extension: GalleryExtension, name: &str) -> Result<()> {
        open_extensions_viewlet(self.viewlets.as_ref(), &format!("@id:{name}")).await;
        let id = extension.identifier();
        self.extensions.install_from_gallery(extension).await?;
        tracing::info!(extension = %id, "installed extension");
        self.notifications
            .info(format!("Extension '{id}' was successfully installed."));
        Ok(())
    }
}

#[async_trait]
impl QuickAccessProvider for InstallExtensionQuickAccessProvider {
    fn prefix(&self) -> &'static str {
        INSTALL_PREFIX
    }

    async fn get_picks(&self, filter: &str, token: CancellationToken) -> Vec<PickItem> {
        // Nothing typed
        if filter.is_empty() {
            return vec![PickItem::informational(type_to_install_label())];
        }

        let generic_search = PickItem::runnable(
            search_for_label(filter),
            PickAction::SearchExtensions(filter.to_string()),
        );

        // A dot means an extension id; anything else is a name search
        if filter.contains('.') {
            self.picks_for_extension_id(filter, generic_search, token)
                .await
        } else {
            vec![generic_search]
        }
    }

    async fn accept(&self, action: PickAction) {
        match action {
            PickAction::SearchExtensions(text) => {
                open_extensions_viewlet(self.viewlets.as_ref(), &text).await;
            }
            PickAction::InstallExtension { extension, name } => {
                self.install_extension(extension, &name).await;
            }
            PickAction::ManageExtensions => {
                open_extensions_viewlet(self.viewlets.as_ref(), "").await;
            }
        }
    }
}

pub struct ManageExtensionsQuickAccessProvider {
    viewlets: Arc<dyn ViewletService>,
}

impl ManageExtensionsQuickAccessProvider {
    pub fn new(viewlets: Arc<dyn ViewletService>) -> Self {
        Self { viewlets }
    }
}

#[async_trait]
impl QuickAccessProvider for ManageExtensionsQuickAccessProvider {
    fn prefix(&self) -> &'static str {
        MANAGE_PREFIX
    }

    async fn get_picks(&self, _filter: &str, _token: CancellationToken) -> Vec<PickItem> {
        vec![PickItem::runnable(manage_label(), PickAction::ManageExtensions)]
    }

    async fn accept(&self, _action: PickAction) {
        open_extensions_viewlet(self.viewlets.as_ref(), "").await;
    }
}

#[cfg(test)]
#[path = "extensions_tests.rs"]
mod tests;
