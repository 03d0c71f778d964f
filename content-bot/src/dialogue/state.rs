//! Per-user dialogue state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Platform;

/// Where a user is in the dialogue. No stored state means the user is idle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    /// Start was issued; platform buttons are on screen.
    AwaitingPlatform,
    /// Platform chosen; waiting for the topic text.
    AwaitingTopic { platform: Platform },
    /// Topic received; the generation call is in flight. `request_id` tells attempts apart.
    Generating {
        platform: Platform,
        topic: String,
        request_id: Uuid,
    },
}

impl DialogueState {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            DialogueState::AwaitingPlatform => None,
            DialogueState::AwaitingTopic { platform }
            | DialogueState::Generating { platform, .. } => Some(*platform),
        }
    }

    pub fn topic(&self) -> Option<&str> {
        match self {
            DialogueState::Generating { topic, .. } => Some(topic),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            DialogueState::AwaitingPlatform => "awaiting_platform",
            DialogueState::AwaitingTopic { .. } => "awaiting_topic",
            DialogueState::Generating { .. } => "generating",
        }
    }
}
