//! Response bodies returned by the API.

use serde::{Deserialize, Serialize};

/// User profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "pictureUrl", default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(rename = "statusMessage", default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// One page of follower user IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerIds {
    #[serde(rename = "userIds", default)]
    pub user_ids: Vec<String>,
    /// Continuation token; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl FollowerIds {
    /// Whether more pages are available.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Basic information about the bot account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "basicId")]
    pub basic_id: String,
    #[serde(rename = "premiumId", default, skip_serializing_if = "Option::is_none")]
    pub premium_id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "pictureUrl", default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// "chat" or "bot".
    #[serde(rename = "chatMode", default, skip_serializing_if = "Option::is_none")]
    pub chat_mode: Option<String>,
    /// "auto" or "manual".
    #[serde(rename = "markAsReadMode", default, skip_serializing_if = "Option::is_none")]
    pub mark_as_read_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMenuIdResponse {
    #[serde(rename = "richMenuId")]
    pub rich_menu_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_optional_fields() {
        let json = r#"{"displayName":"Brown","userId":"U4af4980629"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name, "Brown");
        assert!(profile.picture_url.is_none());
        assert!(profile.status_message.is_none());
    }

    #[test]
    fn test_follower_ids_paging() {
        let page: FollowerIds =
            serde_json::from_str(r#"{"userIds":["U1","U2"],"next":"yANU9IA.."}"#).unwrap();
        assert_eq!(page.user_ids, vec!["U1", "U2"]);
        assert!(page.has_more());

        let last: FollowerIds = serde_json::from_str(r#"{"userIds":[]}"#).unwrap();
        assert!(!last.has_more());
    }

    #[test]
    fn test_bot_info() {
        let json = r#"{"userId":"Ub9952f8","basicId":"@216ru","displayName":"Example bot","chatMode":"chat","markAsReadMode":"manual"}"#;
        let info: BotInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.basic_id, "@216ru");
        assert_eq!(info.chat_mode.as_deref(), Some("chat"));
        assert!(info.premium_id.is_none());
    }
}
