use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignType {
    Voting,
    Hashtag,
    Charity,
    Streaming,
    SocialMedia,
    FanProject,
}

impl CampaignType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::Voting => "voting",
            CampaignType::Hashtag => "hashtag",
            CampaignType::Charity => "charity",
            CampaignType::Streaming => "streaming",
            CampaignType::SocialMedia => "social-media",
            CampaignType::FanProject => "fan-project",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignType::Voting => "Voting Campaign",
            CampaignType::Hashtag => "Hashtag Challenge",
            CampaignType::Charity => "Charity/Fundraising",
            CampaignType::Streaming => "Streaming Goal",
            CampaignType::SocialMedia => "Social Media Drive",
            CampaignType::FanProject => "Fan Project",
        }
    }

    /// Badge style class for campaign cards.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CampaignType::Voting => "bg-accent/10 text-accent border-accent/20",
            CampaignType::Hashtag => "bg-primary/10 text-primary border-primary/20",
            CampaignType::Charity => "bg-green-100 text-green-600 border-green-200",
            CampaignType::Streaming => "bg-purple-100 text-purple-600 border-purple-200",
            CampaignType::SocialMedia => "bg-secondary text-text border-secondary",
            CampaignType::FanProject => "bg-secondary text-text border-secondary",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
