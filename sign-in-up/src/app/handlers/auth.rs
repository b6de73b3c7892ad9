//! # Authentication Handlers
//!
//! Submit dispatch for both modes and the reaction to mode changes.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::mask_email;
use tracing::Instrument;
use uuid::Uuid;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, SubmitOutcome};
use crate::core::service::AuthService;
use crate::forms::{FieldSet, FormMode};

/// Validate the form of the active mode and, if it passes, send it to the backend.
///
/// Internal handler function - use [`crate::app::App::handle_submit`] instead.
pub(crate) fn handle_submit(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    auth_service: &Arc<dyn AuthService>,
    mode: FormMode,
) -> SubmitOutcome {
    match mode {
        FormMode::Login => submit_login(state, event_tx, auth_service),
        FormMode::Registration => submit_registration(state, event_tx, auth_service),
    }
}

fn submit_login(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    auth_service: &Arc<dyn AuthService>,
) -> SubmitOutcome {
    let (request, generation) = {
        let mut state = state.write();
        state.submit_error = None;

        let form = &mut state.forms.login;
        form.mark_all_as_touched();
        form.update_value_and_validity();

        match form.to_request() {
            Ok(request) => {
                state.in_flight += 1;
                (request, state.generation)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Login form invalid, submit suppressed");
                return SubmitOutcome::Invalid {
                    mode: FormMode::Login,
                    fields: form.invalid_fields(),
                };
            }
        }
    };

    let submission_id = Uuid::new_v4();
    let span = tracing::info_span!("login", %submission_id);
    tracing::info!(parent: &span, email = %mask_email(&request.email), "Login");

    let service = auth_service.clone();
    let tx = event_tx.clone();
    tokio::spawn(
        async move {
            let result = service.login(request).await;
            let event = AppEvent::LoginResult {
                submission_id,
                generation,
                result,
            };
            let _ = tx.send(event).await;
        }
        .instrument(span),
    );

    SubmitOutcome::Dispatched {
        mode: FormMode::Login,
        submission_id,
    }
}

fn submit_registration(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    auth_service: &Arc<dyn AuthService>,
) -> SubmitOutcome {
    let (request, generation) = {
        let mut state = state.write();
        state.submit_error = None;

        let form = &mut state.forms.registration;
        form.mark_all_as_touched();
        form.update_value_and_validity();

        match form.to_request() {
            Ok(request) => {
                state.in_flight += 1;
                (request, state.generation)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Registration form invalid, submit suppressed");
                return SubmitOutcome::Invalid {
                    mode: FormMode::Registration,
                    fields: form.invalid_fields(),
                };
            }
        }
    };

    let submission_id = Uuid::new_v4();
    let span = tracing::info_span!("registration", %submission_id);
    tracing::info!(
        parent: &span,
        email = %mask_email(&request.email),
        has_phone = request.phone_number.is_some(),
        "Registration"
    );

    let service = auth_service.clone();
    let tx = event_tx.clone();
    tokio::spawn(
        async move {
            let result = service.register(request).await;
            let _ = tx
                .send(AppEvent::RegistrationResult {
                    submission_id,
                    generation,
                    result,
                })
                .await;
        }
        .instrument(span),
    );

    SubmitOutcome::Dispatched {
        mode: FormMode::Registration,
        submission_id,
    }
}

/// Clear both forms after the mode switched.
///
/// Runs as the mode controller's subscriber; the caller must not hold the state lock.
pub(crate) fn handle_mode_changed(state: &Arc<RwLock<AppState>>, mode: FormMode) {
    let mut state = state.write();
    state.forms.reset();
    state.submit_error = None;
    state.generation += 1;
    tracing::debug!(%mode, "Mode changed, forms reset");
}
