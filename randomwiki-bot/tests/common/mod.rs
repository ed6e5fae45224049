//! Shared test doubles and message builders.

#![allow(dead_code)]

pub mod mock_bot;
pub mod scripted_source;

use randomwiki_bot::{Chat, Message, User};

pub fn make_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 456,
            username: Some("reader".to_string()),
        },
        chat: Chat::new(chat_id),
        content: content.to_string(),
    }
}
