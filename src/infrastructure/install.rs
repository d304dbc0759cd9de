use crate::domain::models::{GalleryExtension, InstalledExtension};
use crate::domain::services::ExtensionManagement;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Ledger {
    #[serde(default)]
    installed: Vec<InstalledExtension>,
}

/// Records installs in a TOML ledger. Writes are serialized through a lock so
/// two concurrent installs cannot clobber each other.
pub struct LocalExtensionManagement {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalExtensionManagement {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<Ledger> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Ledger::default());
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read install ledger at {:?}", self.path))?;
        toml::from_str(&content)
            .with_context(|| format!("Malformed install ledger at {:?}", self.path))
    }

    async fn write(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string(ledger)?;
        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write install ledger at {:?}", self.path))
    }
}

#[async_trait]
impl ExtensionManagement for LocalExtensionManagement {
    async fn install_from_gallery(&self, extension: GalleryExtension) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut ledger = self.read().await?;
        let id = extension.identifier();
        if ledger.installed.iter().any(|e| e.identifier.matches(&id.0)) {
            bail!("Extension '{id}' is already installed.");
        }
        ledger.installed.push(InstalledExtension {
            identifier: id,
            version: extension.version,
        });
        self.write(&ledger).await
    }

    async fn installed(&self) -> Result<Vec<InstalledExtension>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.installed)
    }
}
