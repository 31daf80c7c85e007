//! In-memory environment for tests.
//!
//! A [`SimulatorEnv`] keeps its own variable map, separate from the process
//! environment. Clones share the same map, so a test can hand one clone to a
//! debugger and keep another to change the filter between constructions.
//!
//! # Examples
//!
//! ```rust
//! use nsdebug_env::{EnvProvider as _, simulator::SimulatorEnv};
//!
//! let env = SimulatorEnv::new();
//! env.set_var("DEBUG", "app:*");
//! assert_eq!(env.var("DEBUG").unwrap(), "app:*");
//!
//! env.remove_var("DEBUG");
//! assert!(!env.var_exists("DEBUG"));
//! ```

use crate::{EnvError, EnvProvider, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Simulator environment provider with configurable variables
#[derive(Debug, Clone, Default)]
pub struct SimulatorEnv {
    vars: Arc<RwLock<BTreeMap<String, String>>>,
}

impl SimulatorEnv {
    /// Creates an empty simulator environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator environment seeded with the real process variables
    #[must_use]
    pub fn from_process() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();
        log::trace!("Seeded simulator environment with {} variables", vars.len());

        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Set a variable
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn set_var(&self, name: &str, value: &str) {
        let mut vars = self.vars.write().unwrap();
        vars.insert(name.to_string(), value.to_string());
    }

    /// Remove a variable
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn remove_var(&self, name: &str) {
        let mut vars = self.vars.write().unwrap();
        vars.remove(name);
    }

    /// Clear all variables
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn clear(&self) {
        let mut vars = self.vars.write().unwrap();
        vars.clear();
    }
}

impl EnvProvider for SimulatorEnv {
    /// # Errors
    ///
    /// * If the environment variable is not found
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    fn var(&self, name: &str) -> Result<String> {
        let vars = self.vars.read().unwrap();
        vars.get(name)
            .cloned()
            .ok_or_else(|| EnvError::NotFound(name.to_string()))
    }

    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    fn vars(&self) -> BTreeMap<String, String> {
        let vars = self.vars.read().unwrap();
        vars.clone()
    }
}
