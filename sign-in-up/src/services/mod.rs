//! # Collaborator Implementations
//!
//! Default [`AuthService`] and [`Router`] wired into [`crate::app::App::new`].
//! There is no backend: submissions are logged and answered locally.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::{mask_email, AuthResponse, LoginRequest, RegistrationRequest, UserInfo};

use crate::app::{AppState, Screen};
use crate::core::service::{AuthService, Router};

/// Message carried by every locally produced [`AuthResponse`].
pub const STUB_MESSAGE: &str = "stubbed";

/// Auth service that logs each request and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAuthService;

#[async_trait]
impl AuthService for LoggingAuthService {
    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, String> {
        tracing::info!(?request, "Login payload");
        Ok(stub_response(request.email, None))
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn register(&self, request: RegistrationRequest) -> Result<AuthResponse, String> {
        tracing::info!(?request, "Registration payload");
        let name = format!("{} {}", request.name, request.surname);
        Ok(stub_response(request.email, Some(name)))
    }
}

fn stub_response(email: String, name: Option<String>) -> AuthResponse {
    AuthResponse {
        user: UserInfo { email, name },
        message: STUB_MESSAGE.to_string(),
    }
}

/// Router that switches the screen in the shared app state.
#[derive(Clone)]
pub struct StateRouter {
    state: Arc<RwLock<AppState>>,
}

impl StateRouter {
    pub fn new(state: Arc<RwLock<AppState>>) -> Self {
        Self { state }
    }
}

impl Router for StateRouter {
    fn navigate(&self, destination: Screen) {
        crate::app::navigate(&self.state, destination);
    }
}
