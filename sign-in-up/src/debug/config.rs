//! Application configuration from environment variables

use std::path::PathBuf;

use crate::core::error::{AppError, Result};
use crate::forms::suggestions::DEFAULT_EMAIL_DOMAINS;

const DEFAULT_LOG_LEVEL: &str = "sign_in_up=info,warn";
const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter used when `RUST_LOG` is not a valid directive
    pub log_level: String,
    /// Autocomplete domains, each starting with `@`
    pub email_domains: Vec<String>,
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            email_domains: DEFAULT_EMAIL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source. Unset or unusable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let email_domains = match lookup("SIGN_IN_UP_EMAIL_DOMAINS").map(|raw| parse_domains(&raw)) {
            Some(Ok(domains)) => domains,
            Some(Err(e)) => {
                eprintln!("Warning: {}, using default email domains", e);
                defaults.email_domains
            }
            None => defaults.email_domains,
        };

        Self {
            log_dir: lookup("SIGN_IN_UP_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            email_domains,
            window_width: parse_dimension(lookup("SIGN_IN_UP_WINDOW_WIDTH"))
                .unwrap_or(defaults.window_width),
            window_height: parse_dimension(lookup("SIGN_IN_UP_WINDOW_HEIGHT"))
                .unwrap_or(defaults.window_height),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

/// Parse a comma-separated domain list. A missing `@` is added.
pub fn parse_domains(raw: &str) -> Result<Vec<String>> {
    let domains: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| if d.starts_with('@') { d.to_string() } else { format!("@{}", d) })
        .collect();

    if domains.is_empty() {
        return Err(AppError::Config("SIGN_IN_UP_EMAIL_DOMAINS is empty".to_string()));
    }
    if let Some(bad) = domains.iter().find(|d| d[1..].is_empty() || d[1..].contains('@')) {
        return Err(AppError::Config(format!("invalid email domain '{}'", bad)));
    }
    Ok(domains)
}

fn parse_dimension(raw: Option<String>) -> Option<f32> {
    raw?.trim().parse::<f32>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RUST_LOG", "sign_in_up=debug"),
            ("SIGN_IN_UP_LOG_DIR", "/tmp/sign-in-up"),
            ("SIGN_IN_UP_EMAIL_DOMAINS", "@corp.example, example.org"),
            ("SIGN_IN_UP_WINDOW_WIDTH", "640"),
            ("SIGN_IN_UP_WINDOW_HEIGHT", "800.5"),
        ]));

        assert_eq!(config.log_level, "sign_in_up=debug");
        assert!(config.is_debug_enabled());
        assert_eq!(config.log_dir, PathBuf::from("/tmp/sign-in-up"));
        assert_eq!(config.email_domains, vec!["@corp.example", "@example.org"]);
        assert_eq!(config.window_width, 640.0);
        assert_eq!(config.window_height, 800.5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SIGN_IN_UP_EMAIL_DOMAINS", " , ,"),
            ("SIGN_IN_UP_WINDOW_WIDTH", "wide"),
            ("SIGN_IN_UP_WINDOW_HEIGHT", "-10"),
        ]));

        let defaults = AppConfig::default();
        assert_eq!(config.email_domains, defaults.email_domains);
        assert_eq!(config.window_width, defaults.window_width);
        assert_eq!(config.window_height, defaults.window_height);
    }

    #[test]
    fn test_parse_domains_rejects_malformed() {
        assert!(matches!(parse_domains("@"), Err(AppError::Config(_))));
        assert!(matches!(parse_domains("a@b.com"), Err(AppError::Config(_))));
        assert!(parse_domains("").is_err());
    }
}
