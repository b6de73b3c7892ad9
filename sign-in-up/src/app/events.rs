//! # Application Events
//!
//! Collaborator results sent from submission tasks back to the UI thread.

use shared::AuthResponse;
use uuid::Uuid;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login call completed
    LoginResult {
        submission_id: Uuid,
        /// Form generation the payload was taken from
        generation: u64,
        result: Result<AuthResponse, String>,
    },
    /// Registration call completed
    RegistrationResult {
        submission_id: Uuid,
        /// Form generation the payload was taken from
        generation: u64,
        result: Result<AuthResponse, String>,
    },
}
