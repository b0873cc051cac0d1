//! linebot core - foundation types shared by the other linebot crates.
//!
//! - Unified error type and the structured error body returned by the API
//! - Application configuration (API endpoint, credential, logging)
//! - Structured logging with tracing
//! - Platform directories and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{ApiConfig, AppConfig};
pub use error::{ErrorDetail, ErrorResponse, LbError, LbResult};
pub use logging::init_logging;
pub use platform::Platform;
