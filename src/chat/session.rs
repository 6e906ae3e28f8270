use super::intent::Intent;
use super::responses::ResponseTable;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// In-memory transcript of one chat widget instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    is_bot_typing: bool,
    has_opened: bool,
    pending_replies: usize,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_bot_typing(&self) -> bool {
        self.is_bot_typing
    }

    pub fn has_opened(&self) -> bool {
        self.has_opened
    }

    /// Replies that were promised by a user send but not yet appended.
    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    fn push(&mut self, sender: Sender, text: &str) -> &Message {
        self.next_id += 1;
        self.messages.push(Message {
            id: self.next_id,
            text: text.to_string(),
            sender,
            timestamp: OffsetDateTime::now_utc(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Whitespace-only input is ignored and returns `None`. Anything else is
    /// stored exactly as typed.
    pub fn append_user_message(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        self.is_bot_typing = true;
        self.pending_replies += 1;
        Some(self.push(Sender::User, text))
    }

    pub fn complete_bot_reply(&mut self, text: &str) -> &Message {
        self.is_bot_typing = false;
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.push(Sender::Bot, text)
    }

    /// Bot message that skips the typing phase (quick actions).
    pub fn append_direct_bot_message(&mut self, text: &str) -> &Message {
        self.push(Sender::Bot, text)
    }

    /// Mark the session as opened. The first open of an empty session seeds
    /// the first greeting literal; returns true when that happened.
    pub fn open(&mut self) -> bool {
        if self.has_opened {
            return false;
        }
        self.has_opened = true;
        if !self.messages.is_empty() {
            return false;
        }
        self.push(Sender::Bot, ResponseTable::first(Intent::Greeting));
        true
    }
}
