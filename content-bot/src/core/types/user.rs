//! User identity type for core events.

use serde::{Deserialize, Serialize};

/// End user. `id` is stable per user and keys the dialogue session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}
