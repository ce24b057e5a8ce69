//! Scoped environment overrides for configuration tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Guard that holds the `TODOIST_*` variables at fixed values until dropped.
///
/// Construction takes a process-wide lock, so tests using the guard run one
/// at a time even under the parallel test harness.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

const TODOIST_VARS: [&str; 4] = [
    "TODOIST_API_TOKEN",
    "TODOIST_API_BASE_URL",
    "TODOIST_TIMEOUT_SECS",
    "TODOIST_PAGE_LIMIT",
];

impl EnvVarGuard {
    /// Unsets every `TODOIST_*` variable, then applies `overrides`.
    pub fn set(overrides: &[(&str, &str)]) -> Self {
        let lock = env_lock();
        let previous = TODOIST_VARS
            .iter()
            .map(|key| {
                let prior = env::var_os(key);
                let value = overrides
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, value)| OsStr::new(*value));
                apply(OsStr::new(key), value);
                (OsString::from(key), prior)
            })
            .collect();

        Self {
            previous,
            _lock: lock,
        }
    }

    /// Unsets every `TODOIST_*` variable.
    pub fn cleared() -> Self {
        Self::set(&[])
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            apply(&key, value.as_deref());
        }
    }
}

fn apply(key: &OsStr, value: Option<&OsStr>) {
    unsafe {
        // SAFETY: the global mutex serializes environment mutations in tests.
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
