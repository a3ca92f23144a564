//! Web layer for browser-based UI.
//!
//! Server-rendered pages for browsing links and editing one. Uses Askama
//! templates; edits are submitted to the JSON API from the page.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
