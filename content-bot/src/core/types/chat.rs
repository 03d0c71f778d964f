//! Chat identity type for core events.

use serde::{Deserialize, Serialize};

/// Chat (private or group) the event came from; replies go back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
