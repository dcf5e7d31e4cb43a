use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamColor {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
    Pink,
    Teal,
}

impl TeamColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamColor::Red => "red",
            TeamColor::Blue => "blue",
            TeamColor::Green => "green",
            TeamColor::Purple => "purple",
            TeamColor::Orange => "orange",
            TeamColor::Yellow => "yellow",
            TeamColor::Pink => "pink",
            TeamColor::Teal => "teal",
        }
    }

    /// Gradient style class for team hero banners.
    ///
    /// The enum is closed, so every color maps to a class; there is no
    /// silent-undefined lookup path.
    pub fn gradient_class(&self) -> &'static str {
        match self {
            TeamColor::Red => "from-red-500 to-red-600",
            TeamColor::Blue => "from-blue-500 to-blue-600",
            TeamColor::Green => "from-green-500 to-green-600",
            TeamColor::Purple => "from-purple-500 to-purple-600",
            TeamColor::Orange => "from-orange-500 to-orange-600",
            TeamColor::Yellow => "from-yellow-500 to-yellow-600",
            TeamColor::Pink => "from-pink-500 to-pink-600",
            TeamColor::Teal => "from-teal-500 to-teal-600",
        }
    }

    /// Badge style class for team chips on artist profiles.
    pub fn badge_class(&self) -> &'static str {
        match self {
            TeamColor::Red => "bg-red-100 text-red-600 border-red-200",
            TeamColor::Blue => "bg-blue-100 text-blue-600 border-blue-200",
            TeamColor::Green => "bg-green-100 text-green-600 border-green-200",
            TeamColor::Purple => "bg-purple-100 text-purple-600 border-purple-200",
            TeamColor::Orange => "bg-orange-100 text-orange-600 border-orange-200",
            TeamColor::Yellow => "bg-yellow-100 text-yellow-600 border-yellow-200",
            TeamColor::Pink => "bg-pink-100 text-pink-600 border-pink-200",
            TeamColor::Teal => "bg-teal-100 text-teal-600 border-teal-200",
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
