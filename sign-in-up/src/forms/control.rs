//! # Form Controls
//!
//! A [`FormControl`] is one field: its value, its rules, the current rule
//! failures and the `touched` / `dirty` display flags.

use std::fmt;

use chrono::NaiveDate;

use super::validators::{ValidationError, ValidationErrors, Validator};

/// Types a form field can hold.
pub trait FieldValue: Clone + PartialEq + fmt::Debug {
    /// Whether the value counts as empty for the `Required` rule
    fn is_blank(&self) -> bool;

    /// Text view for text-based rules
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Date view for date-based rules
    fn as_date(&self) -> Option<NaiveDate> {
        None
    }
}

impl FieldValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldValue for NaiveDate {
    fn is_blank(&self) -> bool {
        false
    }

    fn as_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

/// Object-safe view of a control, used by field sets to walk their fields.
pub trait Control {
    fn name(&self) -> &'static str;
    fn is_valid(&self) -> bool;
    fn is_touched(&self) -> bool;
    fn is_dirty(&self) -> bool;
    /// Value is absent or blank
    fn is_empty(&self) -> bool;
    fn errors(&self) -> &ValidationErrors;
    fn mark_as_touched(&mut self);
    /// Re-run every rule against the current value
    fn update_value_and_validity(&mut self);
    /// Back to empty, untouched and pristine
    fn reset(&mut self);
}

/// A single form field.
#[derive(Debug, Clone)]
pub struct FormControl<T: FieldValue> {
    name: &'static str,
    value: Option<T>,
    validators: Vec<Validator>,
    errors: ValidationErrors,
    touched: bool,
    dirty: bool,
}

impl<T: FieldValue> FormControl<T> {
    /// Create an empty control. Rules are evaluated immediately, so a required
    /// field starts out invalid (but untouched, so nothing is displayed).
    pub fn new(name: &'static str, validators: Vec<Validator>) -> Self {
        let errors = ValidationErrors::collect(&validators, None::<&T>);
        Self {
            name,
            value: None,
            validators,
            errors,
            touched: false,
            dirty: false,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Value if present and not blank
    pub fn filled(&self) -> Option<&T> {
        self.value.as_ref().filter(|value| !value.is_blank())
    }

    /// Set a new value from user input and re-validate.
    ///
    /// Marks the control dirty when the value actually changes.
    pub fn set_value(&mut self, value: Option<T>) {
        if self.value != value {
            self.dirty = true;
        }
        self.value = value;
        self.update_value_and_validity();
    }

    /// Record user input that did not produce a new value, e.g. a half-typed date.
    pub fn mark_as_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Error to display: the first failure, once the field is touched.
    pub fn visible_error(&self) -> Option<&ValidationError> {
        if self.touched {
            self.errors.first()
        } else {
            None
        }
    }

    /// Whether the field shows a "required" marker
    pub fn is_required(&self) -> bool {
        self.validators.contains(&Validator::Required)
    }
}

impl<T: FieldValue> Control for FormControl<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_touched(&self) -> bool {
        self.touched
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn is_empty(&self) -> bool {
        self.filled().is_none()
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    fn update_value_and_validity(&mut self) {
        self.errors = ValidationErrors::collect(&self.validators, self.value.as_ref());
    }

    fn reset(&mut self) {
        self.value = None;
        self.touched = false;
        self.dirty = false;
        self.update_value_and_validity();
    }
}
