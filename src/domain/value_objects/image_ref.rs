use serde::{Deserialize, Serialize};

/// Reference to an uploaded media asset. Storage and resizing belong to the
/// media collaborator; the core only carries the URL and alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

impl ImageRef {
    pub fn new(url: &str, alt: &str) -> Self {
        Self {
            url: url.to_string(),
            alt: alt.to_string(),
            caption: None,
        }
    }
}
