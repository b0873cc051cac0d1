//! linebot models - typed request and response bodies for the Messaging API.
//!
//! Models are plain serde value types with no behavior beyond construction
//! helpers. Field names follow the API's camelCase wire format.

pub mod message;
pub mod request;
pub mod response;

pub use linebot_core::error::{ErrorDetail, ErrorResponse};
pub use message::Message;
pub use request::{MulticastRequest, PushMessageRequest, ReplyMessageRequest};
pub use response::{BotInfo, FollowerIds, Profile, RichMenuIdResponse};
