//! Shared test doubles for content-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_llm;
pub mod updates;

use content_bot::{Chat, Command, Event, EventKind, User};

pub const USER_ID: i64 = 1001;

pub fn chat() -> Chat {
    Chat {
        id: USER_ID,
        chat_type: "private".to_string(),
    }
}

pub fn event(kind: EventKind) -> Event {
    Event::new(
        "1",
        User {
            id: USER_ID,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
        },
        chat(),
        kind,
    )
}

pub fn command(cmd: Command) -> Event {
    event(EventKind::Command(cmd))
}

pub fn text(t: &str) -> Event {
    event(EventKind::Text(t.to_string()))
}

pub fn callback(data: &str) -> Event {
    event(EventKind::Callback {
        query_id: "cb-1".to_string(),
        message_id: Some("1".to_string()),
        data: data.to_string(),
    })
}
