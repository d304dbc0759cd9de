use serde::{Deserialize, Serialize};
use std::fmt;

/// `publisher.name`, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExtensionId(pub String);

impl ExtensionId {
    pub fn new(publisher: &str, name: &str) -> Self {
        Self(format!("{publisher}.{name}"))
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One addressable extension as the gallery knows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryExtension {
    pub publisher: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
}

impl GalleryExtension {
    pub fn identifier(&self) -> ExtensionId {
        ExtensionId::new(&self.publisher, &self.name)
    }

    pub fn title(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryQuery {
    /// Exact identifiers to look up. Takes precedence over `text`.
    pub names: Vec<String>,
    pub text: Option<String>,
    pub page_size: usize,
}

impl GalleryQuery {
    pub fn by_name(name: &str) -> Self {
        Self {
            names: vec![name.to_string()],
            text: None,
            page_size: 1,
        }
    }

    pub fn by_text(text: &str, page_size: usize) -> Self {
        Self {
            names: Vec::new(),
            text: Some(text.to_string()),
            page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    pub first_page: Vec<GalleryExtension>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledExtension {
    pub identifier: ExtensionId,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_joins_publisher_and_name() {
        let ext = GalleryExtension {
            publisher: "ms-python".to_string(),
            name: "python".to_string(),
            display_name: String::new(),
            version: "1.0.0".to_string(),
            description: String::new(),
        };
        assert_eq!(ext.identifier().to_string(), "ms-python.python");
        assert!(ext.identifier().matches("MS-Python.Python"));
        assert_eq!(ext.title(), "python");
    }

    #[test]
    fn test_by_name_query_uses_single_page() {
        let query = GalleryQuery::by_name("ms-python.python");
        assert_eq!(query.names, vec!["ms-python.python".to_string()]);
        assert_eq!(query.page_size, 1);
        assert!(query.text.is_none());
    }
}
