//! Application-wide constants.

/// Application name, used for platform directories and log file names.
pub const APP_NAME: &str = "linebot";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base address of the Messaging API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.line.me";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Content type sent with every JSON request body.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Content type for JPEG uploads.
pub const CONTENT_TYPE_JPEG: &str = "image/jpeg";

/// Content type for PNG uploads.
pub const CONTENT_TYPE_PNG: &str = "image/png";

/// Value of the `User-Agent` header.
pub fn user_agent() -> String {
    format!("{APP_NAME}-rust/{APP_VERSION}")
}

/// Request paths of the Messaging API endpoints.
pub mod paths {
    pub const PUSH: &str = "/v2/bot/message/push";
    pub const REPLY: &str = "/v2/bot/message/reply";
    pub const MULTICAST: &str = "/v2/bot/message/multicast";
    pub const BOT_INFO: &str = "/v2/bot/info";
    pub const FOLLOWER_IDS: &str = "/v2/bot/followers/ids";
    pub const DEFAULT_RICH_MENU: &str = "/v2/bot/user/all/richmenu";
}
