//! # Logging and Configuration
//!
//! Startup plumbing for the binary: environment-driven settings and the
//! `tracing` subscriber.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `sign_in_up=debug,info`)
//! - `SIGN_IN_UP_LOG_DIR`: Directory for rotated log files (default `logs`)
//! - `SIGN_IN_UP_EMAIL_DOMAINS`: Comma-separated autocomplete domains
//! - `SIGN_IN_UP_WINDOW_WIDTH` / `SIGN_IN_UP_WINDOW_HEIGHT`: Initial window size
//!
//! ## Usage
//!
//! ```no_run
//! use sign_in_up::debug::{self, config::AppConfig};
//!
//! let config = AppConfig::from_env();
//! debug::logger::init(&config);
//! ```

pub mod config;
pub mod logger;
