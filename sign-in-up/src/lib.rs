//! # Sign-in / Sign-up - Library Root
//!
//! A combined sign-in / sign-up form for a native **egui** window. The binary
//! crate (`main.rs`) only wires logging, the Tokio runtime and `eframe`; all
//! behavior lives here so it can be driven from tests without a window.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              sign-in-up (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  forms     - Mode switch, fields, validation rules     │
//! │  app       - Orchestrator, submit dispatch, events     │
//! │  services  - Default auth service and router           │
//! │  ui        - egui screens and widgets                  │
//! │  debug     - Configuration and tracing setup           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ AuthService (async trait)
//!          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Authentication backend (not part of this crate)       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **forms**: [`FormMode`](forms::FormMode), [`ModeControl`](forms::ModeControl),
//!   [`LoginForm`](forms::LoginForm), [`RegistrationForm`](forms::RegistrationForm)
//! - **app**: [`App`], [`AppState`], [`AppEvent`], [`Screen`]
//! - **core**: [`AppError`] and the collaborator traits
//! - **services**: `LoggingAuthService`, `StateRouter`
//! - **ui**: rendering, `SignInUpWindow`
//! - **debug**: `AppConfig`, logger
//! - **utils**: Tokio runtime
//!
//! ## Event Flow
//!
//! Field edits, mode switches and submits run on the UI thread. A valid submit
//! spawns the collaborator call on Tokio; its result comes back as an
//! [`AppEvent`] and is applied in [`App::on_tick`].
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p sign-in-up
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod forms;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen, SubmitOutcome};
pub use crate::core::{AppError, Result};
