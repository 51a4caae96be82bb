//! Application configuration read from environment variables.

use std::str::FromStr;

use crate::error::AppError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-readable output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(AppError::Config(format!(
                "LOG_FORMAT must be \"json\" or \"pretty\", got \"{other}\""
            ))),
        }
    }
}

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `LOG_FORMAT`, defaults to JSON.
    pub log_format: LogFormat,
    /// `RUST_LOG` filter directives, defaults to `info`.
    pub log_filter: String,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// an environment variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };
        let log_filter = lookup("RUST_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "info".to_owned());

        Ok(Self {
            log_format,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_log_format_and_filter() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LOG_FORMAT", "Pretty"),
            ("RUST_LOG", "storefront_core=debug"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.log_filter, "storefront_core=debug");
    }

    #[test]
    fn test_blank_rust_log_falls_back_to_info() {
        let config = AppConfig::from_lookup(lookup(&[("RUST_LOG", "  ")])).unwrap();

        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        match AppConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])) {
            Err(AppError::Config(msg)) => {
                assert_eq!(msg, "LOG_FORMAT must be \"json\" or \"pretty\", got \"xml\"");
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }
}
