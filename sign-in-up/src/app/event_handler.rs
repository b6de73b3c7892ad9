//! # Event Handler
//!
//! Applies collaborator results on the UI thread.
//!
//! Every result carries the form generation its payload was taken from. A
//! failure from an older generation is dropped: the forms it belonged to were
//! cleared by a mode change, so its banner would land on a form the user never
//! submitted. A success still navigates whatever the generation.

use shared::AuthResponse;
use uuid::Uuid;

use super::{App, AppEvent};
use crate::app::state::Screen;
use crate::core::error::AppError;
use crate::forms::FormMode;

/// One collaborator answer, as delivered by a submission task
struct SubmissionResult {
    mode: FormMode,
    submission_id: Uuid,
    generation: u64,
    result: Result<AuthResponse, String>,
}

impl App {
    /// Internal implementation of event handling
    pub(super) fn handle_event_impl(&mut self, event: AppEvent) {
        let submission = match event {
            AppEvent::LoginResult {
                submission_id,
                generation,
                result,
            } => SubmissionResult {
                mode: FormMode::Login,
                submission_id,
                generation,
                result,
            },
            AppEvent::RegistrationResult {
                submission_id,
                generation,
                result,
            } => SubmissionResult {
                mode: FormMode::Registration,
                submission_id,
                generation,
                result,
            },
        };
        self.handle_submission_result(submission);
    }

    fn handle_submission_result(&mut self, submission: SubmissionResult) {
        let SubmissionResult {
            mode,
            submission_id,
            generation,
            result,
        } = submission;

        tracing::info!(
            %submission_id,
            %mode,
            success = result.is_ok(),
            "Processing submission result"
        );

        let navigate = {
            let mut state = self.state.write();
            state.in_flight = state.in_flight.saturating_sub(1);
            let stale = generation != state.generation;

            match result {
                Ok(response) => {
                    state.submit_error = None;
                    state.last_response = Some(response);
                    true
                }
                Err(message) if stale => {
                    tracing::debug!(
                        %submission_id,
                        %mode,
                        error = %message,
                        "Dropping failure for cleared form"
                    );
                    false
                }
                Err(message) => {
                    let err = AppError::SubmissionFailed(message);
                    tracing::warn!(%submission_id, %mode, error = %err, "Submission failed");
                    state.submit_error = Some(err.to_string());
                    false
                }
            }
        }; // Lock released before the router touches state

        if navigate {
            self.router.navigate(Screen::Success);
        }
    }
}
