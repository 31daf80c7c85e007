pub const DEFAULT_SEPARATOR: &str = ":";
pub const DEFAULT_FILTER_VAR: &str = "DEBUG";

/// Settings shared by a debugger and every child created from it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DebuggerConfig {
    /// Joins name segments and marks optional segments before a `*` in
    /// the filter pattern.
    pub separator: String,
    /// Environment variable holding the filter pattern.
    pub filter_var: String,
}

impl DebuggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_filter_var(mut self, filter_var: impl Into<String>) -> Self {
        self.filter_var = filter_var.into();
        self
    }
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            filter_var: DEFAULT_FILTER_VAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn default_uses_colon_and_debug_var() {
        let config = DebuggerConfig::default();
        assert_eq!(config.separator, ":");
        assert_eq!(config.filter_var, "DEBUG");
    }

    #[test_log::test]
    fn setters_override_defaults() {
        let config = DebuggerConfig::new()
            .with_separator(".")
            .with_filter_var("APP_DEBUG");

        assert_eq!(
            config,
            DebuggerConfig {
                separator: ".".to_string(),
                filter_var: "APP_DEBUG".to_string(),
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn deserializes_with_missing_fields_defaulted() {
        let config: DebuggerConfig = serde_json::from_str(r#"{"separator":"/"}"#).unwrap();
        assert_eq!(config.separator, "/");
        assert_eq!(config.filter_var, "DEBUG");

        let config: DebuggerConfig = serde_json::from_str(r#"{"filterVar":"TRACE_NS"}"#).unwrap();
        assert_eq!(config.separator, ":");
        assert_eq!(config.filter_var, "TRACE_NS");
    }
}
