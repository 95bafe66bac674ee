use serde::{Deserialize, Serialize};

/// Metadata returned by the external lookup service for a URL.
///
/// Every field is optional: the service returns whatever it could extract
/// from the target page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetadata {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl LinkMetadata {
    /// Fallback used when the lookup fails: the URL doubles as the title.
    pub fn fallback(url: &str) -> Self {
        Self {
            title: Some(url.to_string()),
            image: None,
            description: None,
        }
    }
}
