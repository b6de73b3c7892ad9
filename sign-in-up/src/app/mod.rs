//! # Application Orchestrator
//!
//! The [`App`] struct owns the sign-in / sign-up component: the mode switch,
//! the shared form state, and the channel that brings collaborator results
//! back to the UI thread.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains collaborator results           │   │
//! │  │  - handle_mode_change() - switch + reset both forms  │   │
//! │  │  - handle_submit() - validate + dispatch             │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - login / registration forms                        │   │
//! │  │  - current screen, inline submit error               │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Submission Tasks (Tokio)                       │
//! │  AuthService::login / AuthService::register                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! [`App::with_services`] builds both forms empty, starts in
//! [`FormMode::Login`] and subscribes the reset reaction to the mode switch.
//! Dropping the app (or calling [`App::destroy`]) cancels that subscription
//! exactly once.
//!
//! ## Locking
//!
//! The mode switch notifies its subscriber synchronously, and the subscriber
//! takes the state write lock. Never call [`App::handle_mode_change`] while
//! holding a guard on [`App::state`].

mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::AppEvent;
pub use state::*;

pub(crate) use handlers::navigation::handle_screen_change as navigate;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::debug::config::AppConfig;
use crate::core::service::{AuthService, Router};
use crate::forms::{suggestions, FieldSet, FormMode, ModeControl, Subscription};
use crate::services::{LoggingAuthService, StateRouter};

/// The sign-in / sign-up component.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold guards briefly; never across [`App::handle_mode_change`].
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for collaborator results, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    mode: ModeControl,
    mode_subscription: Option<Subscription>,
    auth_service: Arc<dyn AuthService>,
    router: Arc<dyn Router>,
    email_domains: Vec<String>,
}

impl App {
    /// Create the component with the stub backend and the in-app router.
    pub fn new(config: &AppConfig) -> Self {
        let state = Arc::new(RwLock::new(AppState::default()));
        let router = Arc::new(StateRouter::new(state.clone()));
        Self::with_services(
            state,
            Arc::new(LoggingAuthService),
            router,
            config.email_domains.clone(),
        )
    }

    /// Create the component around existing state and collaborators.
    pub fn with_services(
        state: Arc<RwLock<AppState>>,
        auth_service: Arc<dyn AuthService>,
        router: Arc<dyn Router>,
        email_domains: Vec<String>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();

        let mode = ModeControl::new(FormMode::Login);
        let subscriber_state = state.clone();
        let mode_subscription = mode.subscribe(move |mode| {
            handlers::auth::handle_mode_changed(&subscriber_state, mode);
        });

        tracing::debug!(mode = %mode.value(), "Sign-in/up component created");

        Self {
            state,
            event_rx,
            event_tx,
            mode,
            mode_subscription: Some(mode_subscription),
            auth_service,
            router,
            email_domains,
        }
    }

    /// Current mode
    pub fn mode(&self) -> FormMode {
        self.mode.value()
    }

    /// Switch between login and registration. Both forms are cleared when the
    /// mode actually changes.
    pub fn handle_mode_change(&mut self, mode: FormMode) {
        self.mode.set_value(mode);
    }

    /// Submit the form of the current mode.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        handlers::auth::handle_submit(
            &self.state,
            &self.event_tx,
            &self.auth_service,
            self.mode.value(),
        )
    }

    /// Show another screen. Going back to the form starts it over in login mode.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        if screen == Screen::SignInUp {
            self.mode.set_value(FormMode::Login);
            let mut state = self.state.write();
            state.forms.reset();
            state.submit_error = None;
            state.last_response = None;
            state.generation += 1;
        }
        navigate(&self.state, screen);
    }

    /// Apply every collaborator result received since the last frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Run `f` against the field set of the current mode.
    pub fn with_current_form<R>(&self, f: impl FnOnce(&dyn FieldSet) -> R) -> R {
        let state = self.state.read();
        f(state.forms.for_mode(self.mode.value()))
    }

    /// Autocomplete candidates for the email typed so far
    pub fn email_suggestions(&self, input: &str) -> Vec<String> {
        suggestions::email_suggestions(input, &self.email_domains)
    }

    /// Whether the mode-change reaction is still subscribed
    pub fn is_subscribed(&self) -> bool {
        self.mode_subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Tear the component down now instead of waiting for it to be dropped.
    pub fn destroy(self) {
        drop(self);
    }

    fn release_subscription(&mut self) {
        if let Some(subscription) = self.mode_subscription.take() {
            subscription.unsubscribe();
            tracing::debug!("Sign-in/up component destroyed");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.release_subscription();
    }
}
