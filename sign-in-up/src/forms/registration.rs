//! # Registration Form
//!
//! Name, surname, birth date, phone, email and password. Phone is the only
//! optional field; once filled in it must be a full international number.

use chrono::{Local, NaiveDate};
use shared::RegistrationRequest;

use super::control::{Control, FormControl};
use super::validators::{ValidationError, Validator};
use super::{FieldSet, PASSWORD_MIN_LENGTH, PHONE_MIN_LENGTH};
use crate::core::error::{AppError, Result};

/// Longest phone number the input keeps, `+` included (E.164 maximum)
const PHONE_MAX_LENGTH: usize = 16;

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormControl<String>,
    pub surname: FormControl<String>,
    pub birth_date: FormControl<NaiveDate>,
    pub phone_number: FormControl<String>,
    pub email: FormControl<String>,
    pub password: FormControl<String>,
}

impl RegistrationForm {
    /// Empty form; birth dates later than today are rejected.
    pub fn new() -> Self {
        Self::with_max_birth_date(Local::now().date_naive())
    }

    pub fn with_max_birth_date(max_birth_date: NaiveDate) -> Self {
        Self {
            name: FormControl::new("name", vec![Validator::Required]),
            surname: FormControl::new("surname", vec![Validator::Required]),
            birth_date: FormControl::new(
                "birth_date",
                vec![Validator::Required, Validator::MaxDate(max_birth_date)],
            ),
            phone_number: FormControl::new(
                "phone_number",
                vec![Validator::MinLength(PHONE_MIN_LENGTH)],
            ),
            email: FormControl::new("email", vec![Validator::Required, Validator::Email]),
            password: FormControl::new(
                "password",
                vec![Validator::Required, Validator::MinLength(PASSWORD_MIN_LENGTH)],
            ),
        }
    }

    /// Latest accepted birth date
    pub fn max_birth_date(&self) -> Option<NaiveDate> {
        self.birth_date.validators().iter().find_map(|validator| match validator {
            Validator::MaxDate(max) => Some(*max),
            _ => None,
        })
    }

    /// Current values as a registration payload.
    ///
    /// Fails with [`AppError::FieldInvalid`] unless every field passes its rules.
    /// A blank phone number is sent as absent.
    pub fn to_request(&self) -> Result<RegistrationRequest> {
        let invalid = self.invalid_fields();
        let birth_date = match self.birth_date.filled() {
            Some(date) if invalid.is_empty() => *date,
            _ => return Err(AppError::invalid_fields(&invalid)),
        };

        Ok(RegistrationRequest {
            name: self.name.filled().cloned().unwrap_or_default(),
            surname: self.surname.filled().cloned().unwrap_or_default(),
            birth_date,
            phone_number: self.phone_number.filled().cloned(),
            email: self.email.filled().cloned().unwrap_or_default(),
            password: self.password.filled().cloned().unwrap_or_default(),
        })
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet for RegistrationForm {
    fn controls(&self) -> Vec<&dyn Control> {
        vec![
            &self.name as &dyn Control,
            &self.surname,
            &self.birth_date,
            &self.phone_number,
            &self.email,
            &self.password,
        ]
    }

    fn controls_mut(&mut self) -> Vec<&mut dyn Control> {
        vec![
            &mut self.name as &mut dyn Control,
            &mut self.surname,
            &mut self.birth_date,
            &mut self.phone_number,
            &mut self.email,
            &mut self.password,
        ]
    }
}

/// Clean raw phone input: digits only, with an optional leading `+`.
///
/// Spaces, dashes and brackets typed by the user are dropped and the result is
/// capped at the longest international number.
pub fn normalize_phone(input: &str) -> String {
    let mut phone = String::with_capacity(input.len());
    for (index, c) in input.trim().chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && index == 0) {
            phone.push(c);
        }
        if phone.len() == PHONE_MAX_LENGTH {
            break;
        }
    }
    phone
}

/// Parse a birth date typed as `dd.mm.yyyy` (ISO `yyyy-mm-dd` is accepted too).
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .ok()
}

/// Error to show under the birth date input.
///
/// Text that does not parse leaves the value empty; once the field is touched
/// that is reported as a format problem rather than a missing value.
pub fn birth_date_error(control: &FormControl<NaiveDate>, text: &str) -> Option<ValidationError> {
    if control.is_touched() && !text.trim().is_empty() && parse_birth_date(text).is_none() {
        return Some(ValidationError::DateFormat);
    }
    control.visible_error().copied()
}

/// Format a birth date the way [`parse_birth_date`] reads it back
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::with_max_birth_date(today());
        form.name.set_value(Some("Ivan".to_string()));
        form.surname.set_value(Some("Petrov".to_string()));
        form.birth_date.set_value(NaiveDate::from_ymd_opt(1990, 4, 12));
        form.email.set_value(Some("ivan@example.com".to_string()));
        form.password.set_value(Some("correct-horse".to_string()));
        form
    }

    #[test]
    fn test_valid_without_phone() {
        let form = filled();
        assert!(form.is_valid());

        let request = form.to_request().unwrap();
        assert_eq!(request.name, "Ivan");
        assert_eq!(request.birth_date, NaiveDate::from_ymd_opt(1990, 4, 12).unwrap());
        assert_eq!(request.phone_number, None);
    }

    #[test]
    fn test_blank_phone_sent_as_absent() {
        let mut form = filled();
        form.phone_number.set_value(Some(String::new()));
        assert!(form.is_valid());
        assert_eq!(form.to_request().unwrap().phone_number, None);
    }

    #[test]
    fn test_phone_length_boundary() {
        let mut form = filled();
        form.phone_number.set_value(Some("+7999123456".to_string()));
        assert_eq!(form.invalid_fields(), vec!["phone_number"]);

        form.phone_number.set_value(Some("+79991234567".to_string()));
        assert!(form.is_valid());
        assert_eq!(
            form.to_request().unwrap().phone_number.as_deref(),
            Some("+79991234567")
        );
    }

    #[test]
    fn test_password_length_boundary() {
        let mut form = filled();
        form.password.set_value(Some("1234567".to_string()));
        assert!(!form.is_valid());
        form.password.set_value(Some("12345678".to_string()));
        assert!(form.is_valid());
    }

    #[test]
    fn test_each_required_field_blocks_request() {
        let clears: [fn(&mut RegistrationForm); 5] = [
            |f| f.name.set_value(None),
            |f| f.surname.set_value(None),
            |f| f.birth_date.set_value(None),
            |f| f.email.set_value(None),
            |f| f.password.set_value(None),
        ];

        for clear in clears {
            let mut form = filled();
            clear(&mut form);
            assert!(matches!(form.to_request(), Err(AppError::FieldInvalid(_))));
        }
    }

    #[test]
    fn test_birth_date_not_after_max() {
        let mut form = filled();
        form.birth_date.set_value(Some(today()));
        assert!(form.is_valid());

        form.birth_date.set_value(today().succ_opt());
        assert!(form.birth_date.errors().contains("max_date"));
        assert_eq!(form.max_birth_date(), Some(today()));
    }

    #[test]
    fn test_unparsable_birth_date_reports_format() {
        let mut form = RegistrationForm::with_max_birth_date(today());
        let control = &mut form.birth_date;
        control.set_value(parse_birth_date("12.04"));
        control.mark_as_dirty();
        assert_eq!(birth_date_error(control, "12.04"), None);

        control.mark_as_touched();
        assert_eq!(birth_date_error(control, "12.04"), Some(ValidationError::DateFormat));
        assert_eq!(birth_date_error(control, "  "), Some(ValidationError::Required));

        control.set_value(parse_birth_date("01.01.2030"));
        assert_eq!(
            birth_date_error(control, "01.01.2030"),
            Some(ValidationError::MaxDate { max: today() })
        );

        control.set_value(parse_birth_date("12.04.1990"));
        assert_eq!(birth_date_error(control, "12.04.1990"), None);
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+7 (999) 123-45-67"), "+79991234567");
        assert_eq!(normalize_phone("8 999 123 45 67"), "89991234567");
        assert_eq!(normalize_phone("12+34"), "1234");
        assert_eq!(normalize_phone("+12345678901234567890"), "+123456789012345");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_birth_date_text_round_trip() {
        let date = NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();
        assert_eq!(parse_birth_date("12.04.1990"), Some(date));
        assert_eq!(parse_birth_date("1990-04-12"), Some(date));
        assert_eq!(parse_birth_date(&format_birth_date(date)), Some(date));
        assert_eq!(parse_birth_date("31.02.1990"), None);
        assert_eq!(parse_birth_date("12.04"), None);
    }
}
