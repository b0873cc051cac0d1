//! User profile and follower endpoints.

use serde::Serialize;

use linebot_core::constants::paths;
use linebot_core::error::LbResult;
use linebot_models::{FollowerIds, Profile};

use crate::client::{path_segment, ApiClient};

/// Query parameters for the follower ID listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FollowerIdsQuery<'a> {
    /// Page size; the server caps it at 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Continuation token from a previous page's `next`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<&'a str>,
}

impl ApiClient {
    /// Get a user's profile.
    pub async fn get_profile(&self, user_id: &str) -> LbResult<Profile> {
        let id = path_segment(user_id)?;
        self.get_json(&format!("/v2/bot/profile/{id}")).await
    }

    /// Get one page of follower user IDs.
    pub async fn get_follower_ids(&self, limit: Option<u32>, start: Option<&str>) -> LbResult<FollowerIds> {
        let query = FollowerIdsQuery { limit, start };
        self.get(paths::FOLLOWER_IDS, Some(&query)).await
    }
}
