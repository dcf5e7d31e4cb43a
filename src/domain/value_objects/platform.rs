use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a hashtag metric is tracked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedPlatform {
    Instagram,
    TikTok,
    Twitter,
    Facebook,
}

impl TrackedPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedPlatform::Instagram => "instagram",
            TrackedPlatform::TikTok => "tiktok",
            TrackedPlatform::Twitter => "twitter",
            TrackedPlatform::Facebook => "facebook",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrackedPlatform::Instagram => "Instagram",
            TrackedPlatform::TikTok => "TikTok",
            TrackedPlatform::Twitter => "Twitter/X",
            TrackedPlatform::Facebook => "Facebook",
        }
    }

    /// Icon slug for the presentation layer; the enum is closed so there is
    /// no fallback path to forget.
    pub fn icon(&self) -> &'static str {
        match self {
            TrackedPlatform::Instagram => "instagram",
            TrackedPlatform::TikTok => "tiktok",
            TrackedPlatform::Twitter => "twitter",
            TrackedPlatform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for TrackedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
