//! linebot API - HTTP client for the Messaging API.
//!
//! `ApiClient` is the transport: bearer authentication, a fixed request
//! timeout, JSON and raw image bodies, and classification of failures into
//! `LbError`. The `endpoints` modules add typed methods for each API call.

pub mod client;
pub mod endpoints;

// Re-export key types
pub use client::{path_segment, ApiClient, ImageFormat, NoQuery};
pub use linebot_core::error::{ErrorResponse, LbError, LbResult};
