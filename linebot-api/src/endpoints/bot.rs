//! Bot account endpoints.

use linebot_core::constants::paths;
use linebot_core::error::LbResult;
use linebot_models::BotInfo;

use crate::client::ApiClient;

impl ApiClient {
    /// Get basic information about the bot.
    pub async fn get_bot_info(&self) -> LbResult<BotInfo> {
        self.get_json(paths::BOT_INFO).await
    }
}
