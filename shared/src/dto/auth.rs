use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Passwords never reach log output.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("birth_date", &self.birth_date)
            .field("phone_number", &self.phone_number)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication response (login/registration success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub message: String,
}

/// User information returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(phone_number: Option<&str>) -> RegistrationRequest {
        RegistrationRequest {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            phone_number: phone_number.map(str::to_string),
            email: "ivan@example.com".to_string(),
            password: "correct-horse".to_string(),
        }
    }

    #[test]
    fn test_registration_omits_missing_phone() {
        let json = serde_json::to_value(registration(None)).unwrap();
        assert!(json.get("phone_number").is_none());
        assert_eq!(json["birth_date"], "1990-04-12");
    }

    #[test]
    fn test_registration_keeps_phone_when_present() {
        let json = serde_json::to_value(registration(Some("+79991234567"))).unwrap();
        assert_eq!(json["phone_number"], "+79991234567");
    }

    #[test]
    fn test_registration_parses_without_phone() {
        let json = r#"{
            "name": "Ivan",
            "surname": "Petrov",
            "birth_date": "1990-04-12",
            "email": "ivan@example.com",
            "password": "correct-horse"
        }"#;
        let request: RegistrationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, registration(None));
    }

    #[test]
    fn test_debug_redacts_password() {
        let login = LoginRequest {
            email: "a@b.co".to_string(),
            password: "hunter22".to_string(),
        };
        let rendered = format!("{:?} {:?}", login, registration(None));
        assert!(!rendered.contains("hunter22"));
        assert!(!rendered.contains("correct-horse"));
        assert!(rendered.contains("<redacted>"));
    }
}
