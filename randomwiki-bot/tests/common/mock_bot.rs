//! Mock implementation of [`randomwiki_bot::Bot`] that records every outbound message.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use randomwiki_bot::{Bot, BotError, Chat, Result};

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Records sends; optionally fails every send after recording it.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    fail_sends: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A bot whose sends always fail with `BotError::Bot`.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        })
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        if self.fail_sends {
            return Err(BotError::Bot("mock send failure".to_string()));
        }
        Ok(())
    }
}
