use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform scope of an official hashtag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashtagPlatform {
    All,
    Instagram,
    TikTok,
    Twitter,
    Facebook,
}

impl Default for HashtagPlatform {
    fn default() -> Self {
        HashtagPlatform::All
    }
}

/// An official hashtag attached to an artist, team, or campaign.
/// Stored without the leading '#'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagRef {
    pub tag: String,
    #[serde(default)]
    pub platform: HashtagPlatform,
}

impl HashtagRef {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.trim_start_matches('#').to_string(),
            platform: HashtagPlatform::All,
        }
    }

    pub fn on_platform(tag: &str, platform: HashtagPlatform) -> Self {
        Self {
            tag: tag.trim_start_matches('#').to_string(),
            platform,
        }
    }
}

impl fmt::Display for HashtagRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.tag)
    }
}
