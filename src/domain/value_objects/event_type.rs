use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Concert,
    FanMeeting,
    TvAppearance,
    AwardShow,
    Interview,
    Charity,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Concert => "concert",
            EventType::FanMeeting => "fan-meeting",
            EventType::TvAppearance => "tv-appearance",
            EventType::AwardShow => "award-show",
            EventType::Interview => "interview",
            EventType::Charity => "charity",
            EventType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::Concert => "Concert/Performance",
            EventType::FanMeeting => "Fan Meeting",
            EventType::TvAppearance => "TV Appearance",
            EventType::AwardShow => "Award Show",
            EventType::Interview => "Interview",
            EventType::Charity => "Charity Event",
            EventType::Other => "Other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
