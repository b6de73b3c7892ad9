//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the sign-in / sign-up form and the
//! authentication backend it submits to. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for collaborator calls
//!   - **[`dto::auth`]**: Login, registration and response DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_email`]**: Mask email addresses before logging
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Passwords are redacted from `Debug` output, never from the wire format
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "ivan@example.com".to_string(),
//!     password: "correct-horse".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"email\":\"ivan@example.com\""));
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where every export is public API
pub use dto::*;
pub use utils::*;
