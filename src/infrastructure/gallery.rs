use crate::domain::cancellation::{CancellationToken, Cancelled};
use crate::domain::models::{GalleryExtension, GalleryQuery, QueryResult};
use crate::domain::services::ExtensionGallery;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub extensions: Vec<GalleryExtension>,
}

/// Gallery backed by a TOML catalog on disk. The catalog is re-read on every
/// query so edits show up without a restart.
pub struct TomlGallery {
    path: PathBuf,
    delay: Duration,
}

impl TomlGallery {
    pub fn new(path: PathBuf, delay: Duration) -> Self {
        Self { path, delay }
    }

    async fn load(&self) -> Result<Catalog> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Catalog::default());
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read gallery catalog at {:?}", self.path))?;
        toml::from_str(&content)
            .with_context(|| format!("Malformed gallery catalog at {:?}", self.path))
    }
}

pub fn search_catalog(catalog: Catalog, query: &GalleryQuery) -> QueryResult {
    let matches: Vec<GalleryExtension> = if query.names.is_empty() {
        let text = query.text.as_deref().unwrap_or_default().to_lowercase();
        catalog
            .extensions
            .into_iter()
            .filter(|ext| {
                text.is_empty()
                    || ext.identifier().0.to_lowercase().contains(&text)
                    || ext.display_name.to_lowercase().contains(&text)
                    || ext.description.to_lowercase().contains(&text)
            })
            .collect()
    } else {
        catalog
            .extensions
            .into_iter()
            .filter(|ext| query.names.iter().any(|n| ext.identifier().matches(n)))
            .collect()
    };

    let total = matches.len();
    QueryResult {
        first_page: matches.into_iter().take(query.page_size).collect(),
        total,
    }
}

#[async_trait]
impl ExtensionGallery for TomlGallery {
    async fn query(&self, query: GalleryQuery, token: CancellationToken) -> Result<QueryResult> {
        tokio::select! {
            () = token.cancelled() => return Err(Cancelled.into()),
            () = tokio::time::sleep(self.delay) => {}
        }
        let catalog = self.load().await?;
        if token.is_cancellation_requested() {
            return Err(Cancelled.into());
        }
        let result = search_catalog(catalog, &query);
        tracing::debug!(names = ?query.names, text = ?query.text, total = result.total, "gallery query");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cancellation::{is_cancelled_error, CancellationTokenSource};

    const CATALOG: &str = r#"
[[extensions]]
publisher = "ms-python"
name = "python"
display_name = "Python"
version = "2024.0.1"
description = "Linting, debugging and IntelliSense"

[[extensions]]
publisher = "rust-lang"
name = "rust-analyzer"
display_name = "rust-analyzer"
version = "0.3.0"
description = "Rust language support"

[[extensions]]
publisher = "ms-python"
name = "black-formatter"
display_name = "Black Formatter"
version = "2024.2.0"
description = "Formatting for Python using black"
"#;

    fn gallery_with(content: &str) -> Result<(tempfile::TempDir, TomlGallery)> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("gallery.toml");
        std::fs::write(&path, content)?;
        Ok((dir, TomlGallery::new(path, Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_exact_name_lookup_is_case_insensitive() -> Result<()> {
        let (_dir, gallery) = gallery_with(CATALOG)?;
        let result = gallery
            .query(GalleryQuery::by_name("MS-Python.Python"), CancellationToken::none())
            .await?;
        assert_eq!(result.first_page.len(), 1);
        assert_eq!(result.first_page[0].identifier().0, "ms-python.python");
        Ok(())
    }

    #[tokio::test]
    async fn test_exact_name_lookup_does_not_substring_match() -> Result<()> {
        let (_dir, gallery) = gallery_with(CATALOG)?;
        let result = gallery
            .query(GalleryQuery::by_name("ms-python.py"), CancellationToken::none())
            .await?;
        assert!(result.first_page.is_empty());
        assert_eq!(result.total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_text_search_respects_page_size() -> Result<()> {
        let (_dir, gallery) = gallery_with(CATALOG)?;
        let result = gallery
            .query(GalleryQuery::by_text("python", 1), CancellationToken::none())
            .await?;
        assert_eq!(result.first_page.len(), 1);
        assert_eq!(result.total, 2);
        Ok(())
    }

    #[test]
    fn test_sample_catalog_parses() -> Result<()> {
        let catalog: Catalog = toml::from_str(include_str!("../../demos/gallery.toml"))?;
        assert_eq!(catalog.extensions.len(), 4);
        let result = search_catalog(catalog, &GalleryQuery::by_name("rust-lang.rust-analyzer"));
        assert_eq!(result.first_page[0].title(), "rust-analyzer");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_catalog_is_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let gallery = TomlGallery::new(dir.path().join("absent.toml"), Duration::ZERO);
        let result = gallery
            .query(GalleryQuery::by_text("", 10), CancellationToken::none())
            .await?;
        assert_eq!(result, QueryResult::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_an_error() -> Result<()> {
        let (_dir, gallery) = gallery_with("[[extensions]]\npublisher = 3")?;
        let err = gallery
            .query(GalleryQuery::by_name("a.b"), CancellationToken::none())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Malformed gallery catalog"));
        assert!(!is_cancelled_error(&err));
        Ok(())
    }

    #[tokio::test]
    async fn test_cancel_during_delay_returns_cancelled() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("gallery.toml");
        std::fs::write(&path, CATALOG)?;
        let gallery = TomlGallery::new(path, Duration::from_secs(30));

        let source = CancellationTokenSource::new();
        let token = source.token();
        let pending = tokio::spawn(async move {
            gallery.query(GalleryQuery::by_name("ms-python.python"), token).await
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        source.cancel();

        let err = tokio::time::timeout(Duration::from_secs(1), pending)
            .await??
            .unwrap_err();
        assert!(is_cancelled_error(&err));
        Ok(())
    }
}
