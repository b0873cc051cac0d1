//! Request envelopes for the message sending endpoints.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Push one or more messages to a single user, group or room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessageRequest {
    /// Recipient identifier.
    pub to: String,
    /// Messages in delivery order.
    pub messages: Vec<Message>,
}

impl PushMessageRequest {
    pub fn new(to: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            to: to.into(),
            messages,
        }
    }

    /// Push a single text message.
    pub fn text(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(to, vec![Message::text(text)])
    }

    /// Push one text message per string, keeping their order.
    pub fn texts<I, S>(to: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(to, texts.into_iter().map(Message::text).collect())
    }
}

/// Reply to an incoming event using its reply token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMessageRequest {
    #[serde(rename = "replyToken")]
    pub reply_token: String,
    pub messages: Vec<Message>,
}

impl ReplyMessageRequest {
    pub fn new(reply_token: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            reply_token: reply_token.into(),
            messages,
        }
    }

    pub fn text(reply_token: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(reply_token, vec![Message::text(text)])
    }
}

/// Send the same messages to several users at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulticastRequest {
    pub to: Vec<String>,
    pub messages: Vec<Message>,
}

impl MulticastRequest {
    pub fn new<I, S>(to: I, messages: Vec<Message>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            to: to.into_iter().map(Into::into).collect(),
            messages,
        }
    }
}
