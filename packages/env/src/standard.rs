use crate::{EnvError, EnvProvider, Result};
use std::collections::BTreeMap;

/// Environment provider backed by `std::env`
#[derive(Debug, Clone, Copy)]
pub struct StandardEnv;

impl StandardEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StandardEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvProvider for StandardEnv {
    /// Invalid unicode is replaced with `U+FFFD` rather than treated as unset.
    ///
    /// # Errors
    ///
    /// * If the environment variable is not found
    fn var(&self, name: &str) -> Result<String> {
        std::env::var_os(name)
            .map(|value| value.to_string_lossy().into_owned())
            .ok_or_else(|| EnvError::NotFound(name.to_string()))
    }

    fn vars(&self) -> BTreeMap<String, String> {
        std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

static PROVIDER: std::sync::LazyLock<StandardEnv> = std::sync::LazyLock::new(StandardEnv::new);

/// Get an environment variable as a string
///
/// # Errors
///
/// * If the environment variable is not found
pub fn var(name: &str) -> Result<String> {
    PROVIDER.var(name)
}

/// Get an environment variable, `None` if it is unset
pub fn var_opt(name: &str) -> Option<String> {
    PROVIDER.var_opt(name)
}

/// Get an environment variable with a default value
pub fn var_or(name: &str, default: &str) -> String {
    PROVIDER.var_or(name, default)
}

/// Check if an environment variable exists
pub fn var_exists(name: &str) -> bool {
    PROVIDER.var_exists(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    const KEY: &str = "NSDEBUG_ENV_STANDARD_TEST";

    #[test_log::test]
    #[serial]
    fn reads_process_environment() {
        unsafe {
            std::env::set_var(KEY, "app:*");
        }

        assert_eq!(var(KEY).unwrap(), "app:*");
        assert_eq!(var_opt(KEY), Some("app:*".to_string()));
        assert!(var_exists(KEY));
        assert!(StandardEnv::new().vars().contains_key(KEY));

        unsafe {
            std::env::remove_var(KEY);
        }

        assert_eq!(var(KEY), Err(EnvError::NotFound(KEY.to_string())));
        assert_eq!(var_or(KEY, "fallback"), "fallback");
        assert!(!var_exists(KEY));
    }

    #[cfg(unix)]
    #[test_log::test]
    #[serial]
    fn non_unicode_value_is_present() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt as _;

        unsafe {
            std::env::set_var(KEY, OsStr::from_bytes(b"\xff*"));
        }

        assert_eq!(var(KEY).unwrap(), "\u{fffd}*");
        assert!(var_exists(KEY));
        assert_eq!(
            StandardEnv::new().vars().get(KEY).map(String::as_str),
            Some("\u{fffd}*")
        );

        unsafe {
            std::env::remove_var(KEY);
        }
    }

    #[test_log::test]
    #[serial]
    fn empty_value_is_present() {
        unsafe {
            std::env::set_var(KEY, "");
        }

        assert_eq!(var_opt(KEY), Some(String::new()));

        unsafe {
            std::env::remove_var(KEY);
        }
    }
}
