//! Telegram update payloads as the Bot API sends them.

use serde_json::{json, Value};

pub const BOT_USERNAME: &str = "ideas_bot";

pub fn user_json(id: i64) -> Value {
    json!({ "id": id, "is_bot": false, "first_name": "Test", "username": "tester" })
}

pub fn private_chat_json(id: i64) -> Value {
    json!({ "id": id, "type": "private", "first_name": "Test", "username": "tester" })
}

pub fn text_update(update_id: u32, user_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": 10,
            "date": 1_700_000_000,
            "chat": private_chat_json(user_id),
            "from": user_json(user_id),
            "text": text
        }
    })
}

pub fn location_update(update_id: u32, user_id: i64) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": 11,
            "date": 1_700_000_000,
            "chat": private_chat_json(user_id),
            "from": user_json(user_id),
            "location": { "latitude": 50.45, "longitude": 30.52 }
        }
    })
}

pub fn edited_text_update(update_id: u32, user_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "edited_message": {
            "message_id": 12,
            "date": 1_700_000_000,
            "edit_date": 1_700_000_100,
            "chat": private_chat_json(user_id),
            "from": user_json(user_id),
            "text": text
        }
    })
}

pub fn callback_update(update_id: u32, user_id: i64, data: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": "cbq-1",
            "from": user_json(user_id),
            "chat_instance": "-42",
            "data": data,
            "message": {
                "message_id": 77,
                "date": 1_700_000_000,
                "chat": private_chat_json(user_id),
                "from": { "id": 999, "is_bot": true, "first_name": "Ideas", "username": BOT_USERNAME },
                "text": "choose"
            }
        }
    })
}

/// Bot API `Message` result for sendMessage / editMessageText responses.
pub fn sent_message_json(message_id: i32, chat_id: i64) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": private_chat_json(chat_id),
        "from": { "id": 999, "is_bot": true, "first_name": "Ideas", "username": BOT_USERNAME },
        "text": "ok"
    })
}
