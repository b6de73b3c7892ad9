//! # Field Validators
//!
//! Declarative validation rules. A field carries a list of [`Validator`]s; each
//! is a pure predicate over the field's current value and is evaluated
//! independently of the others.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::control::FieldValue;

/// Longest address accepted by [`Validator::Email`]
const EMAIL_MAX_LENGTH: usize = 254;
/// Longest local part (before `@`) accepted by [`Validator::Email`]
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

// Same grammar the common web-framework `email` validator uses, minus the
// length lookaheads (checked separately since `regex` has no lookaround).
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is a valid regex")
});

/// A single validation rule attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Value must be present and non-blank
    Required,
    /// Text value must match the email grammar
    Email,
    /// Text value must have at least this many characters
    MinLength(usize),
    /// Date value must not be after this day
    MaxDate(NaiveDate),
}

impl Validator {
    /// Evaluate the rule against a field value.
    ///
    /// Every rule except [`Validator::Required`] passes on an absent or blank
    /// value, so optional fields only get checked once the user fills them in.
    pub fn validate<T: FieldValue>(&self, value: Option<&T>) -> Option<ValidationError> {
        let present = value.filter(|v| !v.is_blank());

        match *self {
            Validator::Required => match present {
                Some(_) => None,
                None => Some(ValidationError::Required),
            },
            Validator::Email => {
                let text = present.and_then(FieldValue::as_text)?;
                if is_valid_email(text) {
                    None
                } else {
                    Some(ValidationError::Email)
                }
            }
            Validator::MinLength(required_length) => {
                let text = present.and_then(FieldValue::as_text)?;
                let actual_length = text.chars().count();
                if actual_length < required_length {
                    Some(ValidationError::MinLength {
                        required_length,
                        actual_length,
                    })
                } else {
                    None
                }
            }
            Validator::MaxDate(max) => {
                let date = present.and_then(FieldValue::as_date)?;
                if date > max {
                    Some(ValidationError::MaxDate { max })
                } else {
                    None
                }
            }
        }
    }
}

/// Check an address against the email grammar and its length limits.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    match email.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LENGTH => EMAIL_REGEX.is_match(email),
        _ => false,
    }
}

/// A failed rule, with the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Enter a valid email address")]
    Email,

    #[error("Must be at least {required_length} characters (currently {actual_length})")]
    MinLength {
        required_length: usize,
        actual_length: usize,
    },

    #[error("Date cannot be later than {}", .max.format("%d.%m.%Y"))]
    MaxDate { max: NaiveDate },

    /// Typed date text that does not parse; reported by the input, not by a rule
    #[error("Enter a date as dd.mm.yyyy")]
    DateFormat,
}

impl ValidationError {
    /// Stable key identifying the failed rule
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::Email => "email",
            ValidationError::MinLength { .. } => "minlength",
            ValidationError::MaxDate { .. } => "max_date",
            ValidationError::DateFormat => "date_format",
        }
    }
}

/// All rule failures of one field, in validator declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Run every validator against the value and collect the failures.
    pub fn collect<T: FieldValue>(validators: &[Validator], value: Option<&T>) -> Self {
        Self(
            validators
                .iter()
                .filter_map(|validator| validator.validate(value))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First failure, the one displayed under the field
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }

    /// Whether the rule with this key failed
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|error| error.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn test_required() {
        assert_eq!(
            Validator::Required.validate::<String>(None),
            Some(ValidationError::Required)
        );
        assert_eq!(
            Validator::Required.validate(Some(&text(""))),
            Some(ValidationError::Required)
        );
        assert_eq!(Validator::Required.validate(Some(&text("Ivan"))), None);
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name+tag@domain.co.uk"));
        assert!(is_valid_email("user@localhost"));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("test@-example.com"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn test_email_length_limits() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local)));
        let local = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", local)));
        let domain = format!("{}.com", vec!["a".repeat(60); 5].join("."));
        assert!(!is_valid_email(&format!("user@{}", domain)));
    }

    #[test]
    fn test_email_skips_empty_value() {
        assert_eq!(Validator::Email.validate::<String>(None), None);
        assert_eq!(Validator::Email.validate(Some(&text(""))), None);
        assert_eq!(
            Validator::Email.validate(Some(&text("nope"))),
            Some(ValidationError::Email)
        );
    }

    #[test]
    fn test_min_length_boundaries() {
        let password = Validator::MinLength(8);
        assert_eq!(
            password.validate(Some(&text("1234567"))),
            Some(ValidationError::MinLength {
                required_length: 8,
                actual_length: 7
            })
        );
        assert_eq!(password.validate(Some(&text("12345678"))), None);

        let phone = Validator::MinLength(12);
        assert!(phone.validate(Some(&text("+7999123456"))).is_some());
        assert_eq!(phone.validate(Some(&text("+79991234567"))), None);
        assert_eq!(phone.validate::<String>(None), None);
    }

    #[test]
    fn test_min_length_counts_characters() {
        // 8 Cyrillic letters, 16 bytes
        assert_eq!(Validator::MinLength(8).validate(Some(&text("пароль12"))), None);
        assert!(Validator::MinLength(9).validate(Some(&text("пароль12"))).is_some());
    }

    #[test]
    fn test_max_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let rule = Validator::MaxDate(today);
        assert_eq!(rule.validate(Some(&today)), None);
        assert_eq!(
            rule.validate(today.succ_opt().as_ref()),
            Some(ValidationError::MaxDate { max: today })
        );
        assert_eq!(rule.validate::<NaiveDate>(None), None);
    }

    #[test]
    fn test_error_messages() {
        let max = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            ValidationError::MaxDate { max }.to_string(),
            "Date cannot be later than 01.06.2024"
        );
        assert_eq!(
            ValidationError::MinLength {
                required_length: 8,
                actual_length: 3
            }
            .to_string(),
            "Must be at least 8 characters (currently 3)"
        );
    }

    #[test]
    fn test_collect_keeps_declaration_order() {
        let validators = [Validator::Required, Validator::Email, Validator::MinLength(20)];
        let errors = ValidationErrors::collect(&validators, Some(&text("bad")));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some(&ValidationError::Email));
        assert!(errors.contains("minlength"));
        assert!(!errors.contains("required"));
    }
}
