//! # Event Handlers
//!
//! User action handlers, split by concern.

pub mod auth;
pub mod navigation;
