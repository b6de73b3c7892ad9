//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the sign-in / sign-up form and the
//! authentication backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration and authentication response DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Dates**: ISO 8601 calendar dates (`YYYY-MM-DD`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/register
//! Content-Type: application/json
//!
//! {
//!   "name": "Ivan",
//!   "surname": "Petrov",
//!   "birth_date": "1990-04-12",
//!   "email": "ivan@example.com",
//!   "password": "correct-horse"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": { "email": "ivan@example.com", "name": "Ivan" },
//!   "message": "Registration successful"
//! }
//! ```

pub mod auth;

pub use auth::*;
