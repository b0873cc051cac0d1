//! API endpoint modules organized by category.
//!
//! Each module adds typed methods on `ApiClient` for a group of related
//! endpoints.

pub mod bot;
pub mod messages;
pub mod rich_menu;
pub mod users;
