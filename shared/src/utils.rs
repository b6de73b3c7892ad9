//! # Shared Utility Functions
//!
//! Helpers used by both the form component and collaborator implementations.
//!
//! ## Email Masking
//!
//! - [`mask_email`] - Hide most of the local part of an address before it is logged
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_email;
//!
//! assert_eq!(mask_email("ivan.petrov@example.com"), "i***@example.com");
//! ```

/// Mask the local part of an email address, keeping its first character and the domain.
///
/// Values without an `@`, or with an empty local part, are fully masked.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_email;
///
/// assert_eq!(mask_email("ivan@example.com"), "i***@example.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// assert_eq!(mask_email("@example.com"), "***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}
