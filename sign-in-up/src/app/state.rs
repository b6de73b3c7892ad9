//! # Application State Types
//!
//! Screens, the form state shared between the UI thread and the submission
//! tasks, and the outcome of a submit.

use shared::AuthResponse;

use crate::forms::{AuthForms, FormMode};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Combined sign-in / sign-up form
    #[default]
    SignInUp,
    /// Destination after a successful login or registration
    Success,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::SignInUp => "Sign in / Sign up",
            Screen::Success => "Welcome",
        }
    }

    /// Route path of the screen
    pub fn path(&self) -> &'static str {
        match self {
            Screen::SignInUp => "/sign-in-up",
            Screen::Success => "/success-page",
        }
    }
}

/// Global application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Login and registration field sets
    pub forms: AuthForms,
    /// Collaborator failure shown under the form; cleared on the next submit or mode change
    pub submit_error: Option<String>,
    /// Submissions waiting for a collaborator answer
    pub in_flight: usize,
    /// Response of the last successful submission
    pub last_response: Option<AuthResponse>,
    /// Bumped whenever the forms are cleared; results from an older generation
    /// no longer belong to what is on screen
    pub generation: u64,
}

impl AppState {
    /// Whether any submission is still waiting for the backend
    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }
}

/// What a submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form was valid; the collaborator call was dispatched
    Dispatched { mode: FormMode, submission_id: uuid::Uuid },
    /// Form was invalid; nothing was sent and every field is now touched
    Invalid { mode: FormMode, fields: Vec<&'static str> },
}

impl SubmitOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Dispatched { .. })
    }
}
