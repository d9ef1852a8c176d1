//! Runtime settings resolved from the environment.
//!
//! The engine-side processes (global setup, reporting bridge) read their
//! URLs and timeouts from environment variables injected by the selected
//! environment. Every required value is validated up front; a missing one
//! is a fatal configuration error raised before anything else happens.

use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::core::command::ENV_VAR;
use crate::core::models::Environment;
use crate::error::{Error, Result};

pub const PORTAL_URL_VAR: &str = "PORTAL_URL";
pub const API_URL_VAR: &str = "API_URL";
pub const REDIRECT_TIMEOUT_VAR: &str = "REDIRECT_TIMEOUT";

/// The validated settings of the resolved environment. Read-only once
/// constructed; the process exit is the teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub portal_url: String,
    pub api_url: String,
    pub redirect_timeout: Duration,
}

impl Settings {
    /// Loads and validates the settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the settings through an arbitrary lookup. All four values
    /// must be present and non-empty; the failure message names every
    /// missing field at once rather than the first one found.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let env = fetch(ENV_VAR);
        let portal_url = fetch(PORTAL_URL_VAR);
        let api_url = fetch(API_URL_VAR);
        let redirect_timeout = fetch(REDIRECT_TIMEOUT_VAR);

        let missing: Vec<&str> = [
            (ENV_VAR, env.is_none()),
            (PORTAL_URL_VAR, portal_url.is_none()),
            (API_URL_VAR, api_url.is_none()),
            (REDIRECT_TIMEOUT_VAR, redirect_timeout.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if !missing.is_empty() {
            let listing = missing
                .iter()
                .map(|name| format!("    · {name}: null"))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(Error::InvalidConfiguration(format!(
                "Required configuration missing:\n{listing}"
            )));
        }

        let environment = Environment::from_str(&env.unwrap_or_default())?;

        let timeout_raw = redirect_timeout.unwrap_or_default();
        let timeout_ms: u64 = timeout_raw.parse().map_err(|_| {
            Error::InvalidConfiguration(format!(
                "Invalid {REDIRECT_TIMEOUT_VAR}: {timeout_raw} (expected milliseconds)"
            ))
        })?;
        if timeout_ms == 0 {
            return Err(Error::InvalidConfiguration(format!(
                "Invalid {REDIRECT_TIMEOUT_VAR}: must be greater than zero"
            )));
        }

        Ok(Settings {
            environment,
            portal_url: portal_url.unwrap_or_default(),
            api_url: api_url.unwrap_or_default(),
            redirect_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Compute-once holder for the process's settings.
///
/// Constructed at process start and passed by reference into whatever
/// needs configuration; the settings themselves are resolved on first
/// access and reused afterwards. An explicit cell instead of a hidden
/// global, so tests can build as many as they like.
#[derive(Debug, Default)]
pub struct SettingsCell {
    cell: OnceCell<Settings>,
}

impl SettingsCell {
    pub const fn new() -> Self {
        SettingsCell {
            cell: OnceCell::new(),
        }
    }

    /// Returns the settings, resolving them from the environment on the
    /// first call. A failed resolution is not cached, so a later call
    /// retries.
    pub fn get(&self) -> Result<&Settings> {
        self.cell.get_or_try_init(Settings::from_env)
    }
}
