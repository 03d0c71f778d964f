//! Target platforms offered in the first dialogue step.

use crate::core::Choice;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Social-media platform the content ideas are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Telegram,
}

/// Callback value that does not name any [`Platform`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// All platforms, in keyboard order.
    pub const ALL: [Platform; 4] = [
        Platform::TikTok,
        Platform::Instagram,
        Platform::YouTube,
        Platform::Telegram,
    ];

    /// Name used in prompts and as the button's callback value.
    pub fn name(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
            Platform::Telegram => "Telegram",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok 🎬",
            Platform::Instagram => "Instagram 📸",
            Platform::YouTube => "YouTube 🎥",
            Platform::Telegram => "Telegram 💬",
        }
    }

    /// The platform keyboard: two rows of two buttons.
    pub fn choice_rows() -> Vec<Vec<Choice>> {
        Self::ALL
            .chunks(2)
            .map(|row| {
                row.iter()
                    .map(|p| Choice::new(p.label(), p.name()))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}
