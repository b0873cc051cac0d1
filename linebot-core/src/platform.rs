//! Platform-specific directories.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{LbError, LbResult};

/// Locations of per-user application directories.
pub struct Platform;

impl Platform {
    /// Get the platform-specific application data directory.
    ///
    /// - Windows: `%APPDATA%/linebot`
    /// - macOS: `~/Library/Application Support/linebot`
    /// - Linux: `~/.local/share/linebot`
    pub fn data_dir() -> LbResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| LbError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Get the platform-specific configuration directory.
    ///
    /// - Windows: `%APPDATA%/linebot`
    /// - macOS: `~/Library/Application Support/linebot`
    /// - Linux: `~/.config/linebot`
    pub fn config_dir() -> LbResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| LbError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_NAME))
    }
}
