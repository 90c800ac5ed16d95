//! Visual theme preference

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Ocean,
    Sunset,
    Midnight,
}

impl Theme {
    pub const ALL: [Self; 4] = [Self::Default, Self::Ocean, Self::Sunset, Self::Midnight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Midnight => "midnight",
        }
    }

    /// Next theme in the cycle, wrapping around at the end.
    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Ocean,
            Self::Ocean => Self::Sunset,
            Self::Sunset => Self::Midnight,
            Self::Midnight => Self::Default,
        }
    }
}

/// The only state that survives a session. Unknown or missing fields
/// fall back to defaults so an old file never fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}
