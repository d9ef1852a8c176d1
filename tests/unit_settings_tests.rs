//! # Settings Unit Tests / 设置单元测试
//!
//! Unit tests for `core::settings`: validation of the required runtime
//! values and the compute-once behavior of `SettingsCell`.
//!
//! `core::settings` 的单元测试：必需运行时值的校验以及 `SettingsCell`
//! 的一次计算行为。

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use lazy_static::lazy_static;

use suite_runner::core::models::Environment;
use suite_runner::core::settings::{Settings, SettingsCell};
use suite_runner::error::Error;

lazy_static! {
    /// Serializes the tests that mutate the process environment.
    static ref ENV_LOCK: Mutex<()> = Mutex::new(());
}

fn lookup<'a>(values: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<String, String> = values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn complete() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ENV", "stage"),
        ("PORTAL_URL", "https://portal.stage.example"),
        ("API_URL", "https://api.stage.example"),
        ("REDIRECT_TIMEOUT", "5000"),
    ]
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_complete_lookup_resolves_all_fields() {
        let settings = Settings::from_lookup(lookup(&complete())).unwrap();

        assert_eq!(settings.environment, Environment::Stage);
        assert_eq!(settings.portal_url, "https://portal.stage.example");
        assert_eq!(settings.api_url, "https://api.stage.example");
        assert_eq!(settings.redirect_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_missing_value_is_fatal_and_named() {
        let mut values = complete();
        values.retain(|(name, _)| *name != "PORTAL_URL");

        let err = Settings::from_lookup(lookup(&values)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        let message = err.to_string();
        assert!(message.contains("Required configuration missing"));
        assert!(message.contains("PORTAL_URL: null"));
    }

    #[test]
    fn test_every_missing_value_is_listed_at_once() {
        let values = vec![("ENV", "stage"), ("PORTAL_URL", "https://portal")];

        let err = Settings::from_lookup(lookup(&values)).unwrap_err();
        let message = err.to_string();
        // 一次列出所有缺失项，而不是只报第一个
        assert!(message.contains("API_URL: null"));
        assert!(message.contains("REDIRECT_TIMEOUT: null"));
        assert!(!message.contains("PORTAL_URL: null"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut values = complete();
        for entry in values.iter_mut() {
            if entry.0 == "API_URL" {
                entry.1 = "";
            }
        }

        let err = Settings::from_lookup(lookup(&values)).unwrap_err();
        assert!(err.to_string().contains("API_URL: null"));
    }

    #[test]
    fn test_environment_outside_enumeration_is_rejected() {
        let mut values = complete();
        for entry in values.iter_mut() {
            if entry.0 == "ENV" {
                entry.1 = "qa";
            }
        }

        let err = Settings::from_lookup(lookup(&values)).unwrap_err();
        assert!(err.to_string().contains("Invalid environment: qa"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut values = complete();
        for entry in values.iter_mut() {
            if entry.0 == "REDIRECT_TIMEOUT" {
                entry.1 = "0";
            }
        }

        let err = Settings::from_lookup(lookup(&values)).unwrap_err();
        assert!(err.to_string().contains("must be greater than zero"));
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        let mut values = complete();
        for entry in values.iter_mut() {
            if entry.0 == "REDIRECT_TIMEOUT" {
                entry.1 = "soon";
            }
        }

        let err = Settings::from_lookup(lookup(&values)).unwrap_err();
        assert!(err.to_string().contains("expected milliseconds"));
    }
}

#[cfg(test)]
mod cell_tests {
    use super::*;

    fn set_process_env(values: &[(&str, &str)]) {
        for name in ["ENV", "PORTAL_URL", "API_URL", "REDIRECT_TIMEOUT"] {
            // SAFETY: guarded by ENV_LOCK; no other thread reads the
            // environment while these tests run.
            unsafe { std::env::remove_var(name) };
        }
        for (name, value) in values {
            unsafe { std::env::set_var(name, value) };
        }
    }

    #[test]
    fn test_cell_resolves_once_and_caches() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_process_env(&complete());

        let cell = SettingsCell::new();
        let first = cell.get().unwrap().clone();

        // 之后对环境的修改不应影响已缓存的设置
        unsafe { std::env::set_var("PORTAL_URL", "https://portal.other.example") };
        let second = cell.get().unwrap();

        assert_eq!(first, *second);
        assert_eq!(second.portal_url, "https://portal.stage.example");
    }

    #[test]
    fn test_cell_retries_after_a_failed_resolution() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_process_env(&[]);

        let cell = SettingsCell::new();
        assert!(cell.get().is_err());

        set_process_env(&complete());
        let settings = cell.get().unwrap();
        assert_eq!(settings.environment, Environment::Stage);
    }
}
