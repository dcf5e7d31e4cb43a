use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profession {
    Singer,
    Actor,
    Dancer,
    Comedian,
    TvHost,
    Model,
    Musician,
    Other,
}

impl Profession {
    pub fn display_name(&self) -> &'static str {
        match self {
            Profession::Singer => "Singer",
            Profession::Actor => "Actor",
            Profession::Dancer => "Dancer",
            Profession::Comedian => "Comedian",
            Profession::TvHost => "TV Host",
            Profession::Model => "Model",
            Profession::Musician => "Musician",
            Profession::Other => "Other",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
