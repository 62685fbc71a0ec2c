//! Signal credential configuration.
//!
//! Credentials come from the environment and can be overridden by CLI flags.
//! They are only collected and validated as present; the upload to Signal
//! itself is not implemented.

use std::env;

/// Environment variable holding the Signal username.
pub const USERNAME_ENV: &str = "SIGNAL_USERNAME";

/// Environment variable holding the Signal password.
pub const PASSWORD_ENV: &str = "SIGNAL_PASSWORD";

/// Signal account credentials for the destination side of a run.
#[derive(Debug, Clone, Default)]
pub struct SignalConfig {
    /// Signal username; empty when unconfigured.
    pub username: String,
    /// Signal password; empty when unconfigured.
    pub password: String,
}

impl SignalConfig {
    /// Reads credentials from `SIGNAL_USERNAME` / `SIGNAL_PASSWORD`.
    ///
    /// Unset variables yield empty fields; validation happens via
    /// [`is_complete`](Self::is_complete) after CLI overrides are applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            username: env::var(USERNAME_ENV).unwrap_or_default(),
            password: env::var(PASSWORD_ENV).unwrap_or_default(),
        }
    }

    /// Returns true when both credentials are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_incomplete() {
        assert!(!SignalConfig::default().is_complete());
    }

    #[test]
    fn test_config_complete_requires_both_fields() {
        let mut config = SignalConfig {
            username: "someone".to_string(),
            password: String::new(),
        };
        assert!(!config.is_complete());

        config.password = "hunter2".to_string();
        assert!(config.is_complete());
    }
}
