//! # Form Core
//!
//! The two field sets of the sign-in / sign-up screen, the rules their fields
//! carry, and the mode switch choosing between them.
//!
//! ## Modules
//!
//! - **[`mode`]**: [`FormMode`] and the [`ModeControl`] switch with its [`Subscription`] handles
//! - **[`validators`]**: Declarative field rules ([`Validator`]) and their failures
//! - **[`control`]**: A single field ([`FormControl`])
//! - **[`login`]**: Email + password ([`LoginForm`])
//! - **[`registration`]**: Name, surname, birth date, phone, email, password ([`RegistrationForm`])
//! - **[`suggestions`]**: Email domain autocomplete
//!
//! ## Validity
//!
//! A field set is valid iff every field passes every one of its rules.
//! Touching a field only decides whether its errors are displayed.

pub mod control;
pub mod login;
pub mod mode;
pub mod registration;
pub mod suggestions;
pub mod validators;

pub use control::{Control, FieldValue, FormControl};
pub use login::LoginForm;
pub use mode::{FormMode, ModeControl, Subscription};
pub use registration::RegistrationForm;
pub use validators::{ValidationError, ValidationErrors, Validator};

/// Minimum password length, in both modes
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Minimum phone number length, counting the leading `+`
pub const PHONE_MIN_LENGTH: usize = 12;

/// A named collection of fields validated together.
pub trait FieldSet {
    /// Every field, in display order
    fn controls(&self) -> Vec<&dyn Control>;

    fn controls_mut(&mut self) -> Vec<&mut dyn Control>;

    /// Force every field to display its errors
    fn mark_all_as_touched(&mut self) {
        for control in self.controls_mut() {
            control.mark_as_touched();
        }
    }

    /// Re-run every rule of every field
    fn update_value_and_validity(&mut self) {
        for control in self.controls_mut() {
            control.update_value_and_validity();
        }
    }

    /// Clear every field back to empty, untouched and pristine
    fn reset(&mut self) {
        for control in self.controls_mut() {
            control.reset();
        }
    }

    fn is_valid(&self) -> bool {
        self.controls().iter().all(|control| control.is_valid())
    }

    fn is_touched(&self) -> bool {
        self.controls().iter().any(|control| control.is_touched())
    }

    /// No field has been edited since construction or the last reset
    fn is_pristine(&self) -> bool {
        self.controls().iter().all(|control| !control.is_dirty())
    }

    /// All fields touched
    fn is_all_touched(&self) -> bool {
        self.controls().iter().all(|control| control.is_touched())
    }

    /// All fields empty
    fn is_empty(&self) -> bool {
        self.controls().iter().all(|control| control.is_empty())
    }

    /// Names of the fields currently failing a rule
    fn invalid_fields(&self) -> Vec<&'static str> {
        self.controls()
            .iter()
            .filter(|control| !control.is_valid())
            .map(|control| control.name())
            .collect()
    }
}

/// Both field sets of the screen. Only one is active at a time, chosen by
/// the current [`FormMode`].
#[derive(Debug, Clone)]
pub struct AuthForms {
    pub login: LoginForm,
    pub registration: RegistrationForm,
}

impl AuthForms {
    pub fn new() -> Self {
        Self {
            login: LoginForm::new(),
            registration: RegistrationForm::new(),
        }
    }

    /// Field set matching `mode`
    pub fn for_mode(&self, mode: FormMode) -> &dyn FieldSet {
        match mode {
            FormMode::Login => &self.login,
            FormMode::Registration => &self.registration,
        }
    }

    /// Reset both field sets
    pub fn reset(&mut self) {
        self.login.reset();
        self.registration.reset();
    }
}

impl Default for AuthForms {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_projects_active_form() {
        let mut forms = AuthForms::new();
        forms.login.email.set_value(Some("ivan@example.com".to_string()));

        assert_eq!(forms.for_mode(FormMode::Login).controls().len(), 2);
        assert_eq!(forms.for_mode(FormMode::Registration).controls().len(), 6);
        assert!(!forms.for_mode(FormMode::Login).is_pristine());
        assert!(forms.for_mode(FormMode::Registration).is_pristine());
    }

    #[test]
    fn test_reset_clears_both_forms() {
        let mut forms = AuthForms::new();
        forms.login.email.set_value(Some("ivan@example.com".to_string()));
        forms.login.mark_all_as_touched();
        forms.registration.name.set_value(Some("Ivan".to_string()));
        forms.registration.mark_all_as_touched();

        forms.reset();

        for set in [forms.for_mode(FormMode::Login), forms.for_mode(FormMode::Registration)] {
            assert!(set.is_empty());
            assert!(!set.is_touched());
            assert!(set.is_pristine());
        }
    }
}
