//! # Service Traits
//!
//! Contracts for the collaborators the form calls but does not implement:
//! the authentication/registration backend and the router.

use async_trait::async_trait;
use shared::{AuthResponse, LoginRequest, RegistrationRequest};

use crate::app::Screen;

/// Authentication and registration backend.
///
/// Both calls resolve once with success or a human-readable failure message.
/// No retry or timeout policy is assumed by the caller.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in with email and password
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, String>;

    /// Register a new user
    async fn register(&self, request: RegistrationRequest) -> Result<AuthResponse, String>;
}

/// Page transitions requested by the form.
pub trait Router: Send + Sync {
    /// Switch to the given destination
    fn navigate(&self, destination: Screen);
}
