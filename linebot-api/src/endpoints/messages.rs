//! Message endpoints.

use linebot_core::constants::paths;
use linebot_core::error::LbResult;
use linebot_models::{MulticastRequest, PushMessageRequest, ReplyMessageRequest};

use crate::client::{path_segment, ApiClient};

impl ApiClient {
    /// Push messages to a user, group or room.
    pub async fn push_message(&self, request: &PushMessageRequest) -> LbResult<()> {
        self.post(paths::PUSH, Some(request)).await
    }

    /// Reply to an event with its reply token.
    pub async fn reply_message(&self, request: &ReplyMessageRequest) -> LbResult<()> {
        self.post(paths::REPLY, Some(request)).await
    }

    /// Send the same messages to several users.
    pub async fn multicast(&self, request: &MulticastRequest) -> LbResult<()> {
        self.post(paths::MULTICAST, Some(request)).await
    }

    /// Download the binary content (image, video, audio, file) of a received message.
    pub async fn get_message_content(&self, message_id: &str) -> LbResult<Vec<u8>> {
        let id = path_segment(message_id)?;
        self.get_bytes(&format!("/v2/bot/message/{id}/content")).await
    }
}
