//! Test utilities for environment variable isolation.
//!
//! Expansion reads the process environment, so any test that sets or clears
//! variables has to serialize against every other test that touches the
//! environment, and must restore the previous state afterwards.

use std::env;
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on environment variables.
///
/// Hold this for the whole test body, before the first [`EnvVarGuard`] is
/// created. Without it, parallel tests clobber each other's variables and
/// fail in ways that depend on scheduling.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// # Example
///
/// ```ignore
/// let _lock = ENV_LOCK.lock().unwrap();
/// let _home = EnvVarGuard::set("HOME", "/home/janedoe");
/// let _xdg = EnvVarGuard::unset("XDG_CONFIG_HOME");
/// // ... resolution under a known environment ...
/// // Previous values come back when the guards drop
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Clear an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}
