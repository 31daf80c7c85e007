//! Environment variable providers.
//!
//! `nsdebug` reads its filter pattern (the `DEBUG` variable by default) through
//! the [`EnvProvider`] trait so that callers can swap the real process
//! environment for an in-memory one.
//!
//! * [`standard::StandardEnv`] reads `std::env`
//! * [`simulator::SimulatorEnv`] keeps its own variable map for tests

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use thiserror::Error;

#[cfg(feature = "simulator")]
pub mod simulator;

#[cfg(feature = "std")]
pub mod standard;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Environment variable '{0}' not found")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, EnvError>;

/// A key-value lookup over environment variables.
pub trait EnvProvider: Send + Sync {
    /// Get an environment variable as a string
    ///
    /// # Errors
    ///
    /// * If the environment variable is not found
    fn var(&self, name: &str) -> Result<String>;

    /// Get all environment variables
    fn vars(&self) -> BTreeMap<String, String>;

    /// Get an environment variable, mapping a missing variable to `None`.
    ///
    /// A variable that is set to the empty string is still `Some("")`.
    fn var_opt(&self, name: &str) -> Option<String> {
        match self.var(name) {
            Ok(value) => Some(value),
            Err(EnvError::NotFound(_)) => None,
        }
    }

    /// Get an environment variable with a default value
    fn var_or(&self, name: &str, default: &str) -> String {
        self.var_opt(name).unwrap_or_else(|| default.to_string())
    }

    /// Check if an environment variable exists
    fn var_exists(&self, name: &str) -> bool {
        self.var(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FixedEnv;

    impl EnvProvider for FixedEnv {
        fn var(&self, name: &str) -> Result<String> {
            match name {
                "PRESENT" => Ok("value".to_string()),
                "EMPTY" => Ok(String::new()),
                _ => Err(EnvError::NotFound(name.to_string())),
            }
        }

        fn vars(&self) -> BTreeMap<String, String> {
            BTreeMap::from([
                ("EMPTY".to_string(), String::new()),
                ("PRESENT".to_string(), "value".to_string()),
            ])
        }
    }

    #[test_log::test]
    fn var_opt_distinguishes_missing_from_empty() {
        assert_eq!(FixedEnv.var_opt("PRESENT"), Some("value".to_string()));
        assert_eq!(FixedEnv.var_opt("EMPTY"), Some(String::new()));
        assert_eq!(FixedEnv.var_opt("MISSING"), None);
    }

    #[test_log::test]
    fn var_or_falls_back_only_when_missing() {
        assert_eq!(FixedEnv.var_or("MISSING", "fallback"), "fallback");
        assert_eq!(FixedEnv.var_or("EMPTY", "fallback"), "");
    }

    #[test_log::test]
    fn var_exists_reports_presence() {
        assert!(FixedEnv.var_exists("EMPTY"));
        assert!(!FixedEnv.var_exists("MISSING"));
    }

    #[test_log::test]
    fn not_found_error_names_the_variable() {
        let err = FixedEnv.var("MISSING").unwrap_err();
        assert_eq!(err.to_string(), "Environment variable 'MISSING' not found");
    }
}
