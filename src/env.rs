use std::collections::HashMap;
use std::env as stdenv;

/// Read-only view of the process environment used by the interpreter.
///
/// Lookups go to `vars` first and, unless the environment is isolated, fall
/// back to the live process environment. Nothing is cached, so a variable that
/// changes mid-session is seen on the next lookup.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Overrides consulted before the process environment.
    pub vars: HashMap<String, String>,
    inherit: bool,
}

impl Environment {
    /// View of the live process environment with no overrides.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            inherit: true,
        }
    }

    /// Environment that only sees `vars`; the process environment is ignored.
    pub fn isolated() -> Self {
        Self {
            vars: HashMap::new(),
            inherit: false,
        }
    }

    /// Get the value of an environment variable.
    pub fn get_var(&self, key: &str) -> Option<String> {
        match self.vars.get(key) {
            Some(val) => Some(val.clone()),
            None if self.inherit => stdenv::var(key).ok(),
            None => None,
        }
    }

    /// Set or override an environment variable in `self.vars`.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// Name of the invoking user, taken from `USER`.
    pub fn user(&self) -> Option<String> {
        self.get_var("USER")
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;

    #[test]
    fn test_env_set_and_get_var() {
        let mut env = Environment::isolated();

        // initially absent
        assert_eq!(env.get_var("SOME_RANDOM_ENV_VAR_12345"), None);

        env.set_var("KEY", "VALUE");

        assert_eq!(env.get_var("KEY"), Some("VALUE".to_string()));
    }

    #[test]
    fn test_env_reads_from_process_env() {
        let env = Environment::new();
        assert!(env.get_var("PATH").is_some());
    }

    #[test]
    fn test_isolated_env_ignores_process_env() {
        let env = Environment::isolated();
        assert_eq!(env.get_var("PATH"), None);
        assert_eq!(env.user(), None);
    }

    #[test]
    fn test_override_wins_over_process_env() {
        let mut env = Environment::new();
        env.set_var("PATH", "/nowhere");
        assert_eq!(env.get_var("PATH"), Some("/nowhere".to_string()));
    }
}
