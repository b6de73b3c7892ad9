//! # Login Form
//!
//! Email and password, both required.

use shared::LoginRequest;

use super::control::{Control, FormControl};
use super::validators::Validator;
use super::{FieldSet, PASSWORD_MIN_LENGTH};
use crate::core::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormControl<String>,
    pub password: FormControl<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormControl::new("email", vec![Validator::Required, Validator::Email]),
            password: FormControl::new(
                "password",
                vec![Validator::Required, Validator::MinLength(PASSWORD_MIN_LENGTH)],
            ),
        }
    }

    /// Current values as a login payload.
    ///
    /// Fails with [`AppError::FieldInvalid`] unless every field passes its rules.
    pub fn to_request(&self) -> Result<LoginRequest> {
        if !self.is_valid() {
            return Err(AppError::invalid_fields(&self.invalid_fields()));
        }

        Ok(LoginRequest {
            email: self.email.filled().cloned().unwrap_or_default(),
            password: self.password.filled().cloned().unwrap_or_default(),
        })
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet for LoginForm {
    fn controls(&self) -> Vec<&dyn Control> {
        vec![&self.email as &dyn Control, &self.password]
    }

    fn controls_mut(&mut self) -> Vec<&mut dyn Control> {
        vec![&mut self.email as &mut dyn Control, &mut self.password]
    }
}
