//! Dialogue: platform choice → topic → generated ideas → reset.
//!
//! [`DialogueController`] drives the state machine; [`SessionStore`] keeps one
//! [`DialogueState`] per user; [`texts`] holds everything the user reads.

mod controller;
mod platform;
mod state;
mod store;
pub mod texts;

pub use controller::{DialogueController, TopicOutcome};
pub use platform::{Platform, UnknownPlatform};
pub use state::DialogueState;
pub use store::{InMemorySessionStore, SessionStore, UserId};
