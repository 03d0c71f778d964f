//! Core types: user, chat, inbound event, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod event;
mod handler;
mod response;
mod user;

pub use chat::Chat;
pub use event::{Command, Event, EventKind};
pub use handler::{Handler, ToCoreEvent, ToCoreUser};
pub use response::HandlerResponse;
pub use user::User;
