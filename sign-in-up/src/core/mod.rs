//! # Core Abstractions
//!
//! Error types and collaborator traits shared by the form core, the app
//! orchestrator and the renderer.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits for dependency injection (`AuthService`, `Router`)
//!
//! ## Dependency Injection
//!
//! Collaborators are injected into [`crate::app::App`] as trait objects:
//!
//! ```rust,ignore
//! use sign_in_up::core::service::{AuthService, Router};
//!
//! // In production: the logging stub and the state router
//! let auth: Arc<dyn AuthService> = Arc::new(LoggingAuthService);
//!
//! // In tests: recording mocks
//! let auth: Arc<dyn AuthService> = Arc::new(RecordingAuthService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{AuthService, Router};
