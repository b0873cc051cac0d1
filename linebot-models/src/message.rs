//! Message payloads.

use serde::{Deserialize, Serialize};

/// A message object sent to a user, group or room.
///
/// Serialized with a `type` discriminator:
/// ```json
/// { "type": "text", "text": "hello" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// Plain text.
    Text { text: String },
    /// Sticker from a sticker package.
    Sticker {
        #[serde(rename = "packageId")]
        package_id: String,
        #[serde(rename = "stickerId")]
        sticker_id: String,
    },
    /// Image referenced by HTTPS URLs.
    Image {
        #[serde(rename = "originalContentUrl")]
        original_content_url: String,
        #[serde(rename = "previewImageUrl")]
        preview_image_url: String,
    },
}

impl Message {
    /// Create a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text { text: text.into() }
    }

    /// Create a sticker message.
    pub fn sticker(package_id: impl Into<String>, sticker_id: impl Into<String>) -> Self {
        Message::Sticker {
            package_id: package_id.into(),
            sticker_id: sticker_id.into(),
        }
    }

    /// Create an image message.
    pub fn image(original_content_url: impl Into<String>, preview_image_url: impl Into<String>) -> Self {
        Message::Image {
            original_content_url: original_content_url.into(),
            preview_image_url: preview_image_url.into(),
        }
    }

    /// The wire discriminator of this message.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Text { .. } => "text",
            Message::Sticker { .. } => "sticker",
            Message::Image { .. } => "image",
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_json() {
        let value = serde_json::to_value(Message::text("hello")).unwrap();
        assert_eq!(value, json!({ "type": "text", "text": "hello" }));
    }

    #[test]
    fn test_sticker_message_json() {
        let value = serde_json::to_value(Message::sticker("446", "1988")).unwrap();
        assert_eq!(
            value,
            json!({ "type": "sticker", "packageId": "446", "stickerId": "1988" })
        );
    }

    #[test]
    fn test_image_message_parses_by_tag() {
        let msg: Message = serde_json::from_value(json!({
            "type": "image",
            "originalContentUrl": "https://example.com/a.jpg",
            "previewImageUrl": "https://example.com/a_preview.jpg",
        }))
        .unwrap();
        assert_eq!(msg.kind(), "image");
        assert_eq!(
            msg,
            Message::image("https://example.com/a.jpg", "https://example.com/a_preview.jpg")
        );
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result: Result<Message, _> = serde_json::from_value(json!({ "type": "video" }));
        assert!(result.is_err());
    }
}
