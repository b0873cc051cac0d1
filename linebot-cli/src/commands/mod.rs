//! CLI command implementations.

pub mod messages;
pub mod rich_menu;
pub mod users;

use serde::Serialize;

use linebot_api::ApiClient;
use linebot_core::config::AppConfig;
use linebot_core::error::{LbError, LbResult};

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> LbResult<ApiClient> {
    if !config.is_configured() {
        return Err(LbError::MissingConfig(
            "channel access token (set api.channel_access_token or pass --token)".into(),
        ));
    }
    ApiClient::new(&config.api)
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> LbResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Infer the upload format from a file extension.
pub fn image_format_from_path(path: &std::path::Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
