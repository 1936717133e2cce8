//! Integration tests for the public resolution surface.
//!
//! These exercise the crate exactly as a consumer would: the compiled-in
//! catalog for the build platform plus the real process environment. They
//! only read the environment, never mutate it, so they are safe to run in
//! parallel.

use stddirs::{Dir, Exclude, cache_dirs, config_dirs};

/// Every supported platform ships at least one entry that resolves in any
/// sane environment, so a populated result is the baseline expectation.
#[test]
fn cache_resolution_finds_something() {
    let dirs = cache_dirs("foobar", Exclude::empty());
    assert!(!dirs.is_empty(), "no cache directory resolved at all");
}

#[test]
fn config_resolution_finds_something() {
    let dirs = config_dirs("foobar", Exclude::empty());
    assert!(!dirs.is_empty(), "no config directory resolved at all");
}

/// Two resolutions under the same environment must agree, values and order.
#[test]
fn resolution_is_deterministic() {
    let first = config_dirs("foobar", Exclude::empty());
    let second = config_dirs("foobar", Exclude::empty());
    assert_eq!(first, second);
}

#[test]
fn program_name_appears_in_every_path() {
    for dir in cache_dirs("foobar", Exclude::empty()) {
        assert!(
            dir.path.to_string_lossy().contains("foobar"),
            "{} does not mention the program",
            dir.path.display()
        );
    }
}

#[test]
fn excluding_user_leaves_only_system_dirs() {
    for dir in config_dirs("foobar", Exclude::USER) {
        assert!(!dir.user, "{} is user-scoped", dir.path.display());
        assert!(!dir.roaming);
    }
}

#[test]
fn excluding_system_leaves_only_user_dirs() {
    for dir in config_dirs("foobar", Exclude::SYSTEM) {
        assert!(dir.user, "{} is system-wide", dir.path.display());
    }
}

/// Every catalog entry is either user-scoped or system-wide, so excluding
/// both classes must always produce an empty list.
#[test]
fn excluding_both_scopes_leaves_nothing() {
    assert!(cache_dirs("foobar", Exclude::USER | Exclude::SYSTEM).is_empty());
    assert!(config_dirs("foobar", Exclude::USER | Exclude::SYSTEM).is_empty());
}

#[test]
fn excluding_roaming_drops_only_roaming_dirs() {
    for dir in config_dirs("foobar", Exclude::ROAMING) {
        assert!(!dir.roaming, "{} roams", dir.path.display());
    }
}

/// Resolved lists survive a serialization round trip unchanged.
#[test]
fn resolved_dirs_serialize_cleanly() {
    let dirs = config_dirs("foobar", Exclude::empty());
    let json = serde_json::to_string(&dirs).unwrap();
    let back: Vec<Dir> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dirs);
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;
    use std::path::Path;

    /// `/etc/<program>` needs no environment at all, so it must always be in
    /// the system config list.
    #[test]
    fn etc_is_always_a_system_config_dir() {
        let dirs = config_dirs("foobar", Exclude::USER);
        assert!(
            dirs.iter().any(|dir| dir.path == Path::new("/etc/foobar")),
            "missing /etc/foobar in {dirs:?}"
        );
    }

    #[test]
    fn var_cache_is_always_a_system_cache_dir() {
        let dirs = cache_dirs("foobar", Exclude::USER);
        assert!(
            dirs.iter()
                .any(|dir| dir.path == Path::new("/var/cache/foobar")),
            "missing /var/cache/foobar in {dirs:?}"
        );
    }

    /// The user config entry always outranks the system entries.
    #[test]
    fn user_config_comes_first() {
        let dirs = config_dirs("foobar", Exclude::empty());
        assert!(dirs[0].user, "first entry {} is not user-scoped", dirs[0].path.display());
    }
}

#[cfg(target_os = "windows")]
mod windows {
    use super::*;

    /// The roaming `APPDATA` location outranks everything else for config.
    #[test]
    fn roaming_config_comes_first() {
        let dirs = config_dirs("foobar", Exclude::empty());
        assert!(dirs[0].roaming, "first entry does not roam");
        assert!(dirs[0].user);
    }
}
