//! # Email Autocomplete
//!
//! Completes the domain part of an email address from a list of well-known
//! domains (each given with its leading `@`).

/// Domains offered when nothing else is configured
pub const DEFAULT_EMAIL_DOMAINS: &[&str] = &[
    "@gmail.com",
    "@mail.ru",
    "@yandex.ru",
    "@outlook.com",
    "@yahoo.com",
];

/// Complete addresses for the text typed so far.
///
/// - No `@` yet: every domain appended to the typed local part.
/// - After `@`: domains starting with what follows the `@`.
///
/// Nothing is suggested for blank input, for input that already equals a
/// suggestion, or when the local part is empty.
pub fn email_suggestions<S: AsRef<str>>(input: &str, domains: &[S]) -> Vec<String> {
    let input = input.trim();
    let (local, typed_domain) = match input.split_once('@') {
        Some((local, domain)) => (local, Some(domain)),
        None => (input, None),
    };

    if local.is_empty() {
        return Vec::new();
    }

    domains
        .iter()
        .map(AsRef::as_ref)
        .filter(|domain| match typed_domain {
            Some(typed) => domain
                .strip_prefix('@')
                .is_some_and(|bare| bare.starts_with(typed) && bare != typed),
            None => true,
        })
        .map(|domain| format!("{}{}", local, domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggests_every_domain_before_at() {
        let suggestions = email_suggestions("ivan", DEFAULT_EMAIL_DOMAINS);
        assert_eq!(suggestions.len(), DEFAULT_EMAIL_DOMAINS.len());
        assert_eq!(suggestions[0], "ivan@gmail.com");
    }

    #[test]
    fn test_filters_by_typed_domain() {
        assert_eq!(
            email_suggestions("ivan@ya", DEFAULT_EMAIL_DOMAINS),
            vec!["ivan@yandex.ru", "ivan@yahoo.com"]
        );
        assert_eq!(
            email_suggestions("ivan@", DEFAULT_EMAIL_DOMAINS).len(),
            DEFAULT_EMAIL_DOMAINS.len()
        );
    }

    #[test]
    fn test_no_suggestion_for_complete_address() {
        assert!(email_suggestions("ivan@mail.ru", DEFAULT_EMAIL_DOMAINS).is_empty());
        assert!(email_suggestions("ivan@example.org", DEFAULT_EMAIL_DOMAINS).is_empty());
    }

    #[test]
    fn test_no_suggestion_without_local_part() {
        assert!(email_suggestions("", DEFAULT_EMAIL_DOMAINS).is_empty());
        assert!(email_suggestions("@gm", DEFAULT_EMAIL_DOMAINS).is_empty());
    }

    #[test]
    fn test_owned_domains() {
        let domains = vec!["@corp.example".to_string()];
        assert_eq!(email_suggestions("ivan@c", &domains), vec!["ivan@corp.example"]);
    }
}
