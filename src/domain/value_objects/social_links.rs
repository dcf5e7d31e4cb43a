use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    TikTok,
    YouTube,
    Twitter,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Twitter => "twitter",
        }
    }

    pub fn icon(&self) -> &'static str {
        // Icon slugs match the platform names the frontend icon set uses.
        self.as_str()
    }

    /// Build a profile URL from a stored handle. Handles that are already
    /// absolute URLs pass through untouched.
    pub fn profile_url(&self, handle: &str) -> String {
        if handle.starts_with("http") {
            handle.to_string()
        } else {
            format!("https://{}.com/{}", self.as_str(), handle)
        }
    }
}

/// Social-media handle map; a `None` entry means the account is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Set handles in declaration order, paired with their platform.
    pub fn links(&self) -> Vec<(SocialPlatform, &str)> {
        let entries = [
            (SocialPlatform::Facebook, self.facebook.as_deref()),
            (SocialPlatform::Instagram, self.instagram.as_deref()),
            (SocialPlatform::TikTok, self.tiktok.as_deref()),
            (SocialPlatform::YouTube, self.youtube.as_deref()),
            (SocialPlatform::Twitter, self.twitter.as_deref()),
        ];
        entries
            .into_iter()
            .filter_map(|(platform, handle)| handle.map(|h| (platform, h)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links().is_empty()
    }
}
