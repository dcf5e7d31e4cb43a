use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsCategory {
    ShowUpdates,
    ArtistNews,
    BehindTheScenes,
    FanStories,
    Interviews,
    Announcements,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::ShowUpdates => "show-updates",
            NewsCategory::ArtistNews => "artist-news",
            NewsCategory::BehindTheScenes => "behind-the-scenes",
            NewsCategory::FanStories => "fan-stories",
            NewsCategory::Interviews => "interviews",
            NewsCategory::Announcements => "announcements",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NewsCategory::ShowUpdates => "Show Updates",
            NewsCategory::ArtistNews => "Artist News",
            NewsCategory::BehindTheScenes => "Behind the Scenes",
            NewsCategory::FanStories => "Fan Stories",
            NewsCategory::Interviews => "Interviews",
            NewsCategory::Announcements => "Announcements",
        }
    }

    /// Badge style class for news cards.
    pub fn badge_class(&self) -> &'static str {
        match self {
            NewsCategory::ShowUpdates => "bg-blue-100 text-blue-600",
            NewsCategory::ArtistNews => "bg-primary/10 text-primary",
            NewsCategory::BehindTheScenes => "bg-purple-100 text-purple-600",
            NewsCategory::FanStories => "bg-green-100 text-green-600",
            NewsCategory::Interviews => "bg-yellow-100 text-yellow-600",
            NewsCategory::Announcements => "bg-accent/10 text-accent",
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
