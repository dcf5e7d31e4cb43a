use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtistStatus {
    Active,
    Eliminated,
    Winner,
    Finalist,
    Alumni,
}

impl ArtistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistStatus::Active => "active",
            ArtistStatus::Eliminated => "eliminated",
            ArtistStatus::Winner => "winner",
            ArtistStatus::Finalist => "finalist",
            ArtistStatus::Alumni => "alumni",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArtistStatus::Active => "Active",
            ArtistStatus::Eliminated => "Eliminated",
            ArtistStatus::Winner => "Winner",
            ArtistStatus::Finalist => "Finalist",
            ArtistStatus::Alumni => "Alumni",
        }
    }
}

impl Default for ArtistStatus {
    fn default() -> Self {
        ArtistStatus::Active
    }
}

impl fmt::Display for ArtistStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
