//! Resolved directory values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single standard directory produced by resolution.
///
/// The entry points ([`crate::cache_dirs`], [`crate::config_dirs`]) return
/// these sorted by importance, most important first. The scope flags are
/// copied from the catalog entry the path was expanded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dir {
    /// Path to the directory. Nothing is created on disk; the path may or
    /// may not exist.
    pub path: PathBuf,
    /// True for a user-specific directory, false for a system-wide one.
    pub user: bool,
    /// True for a roaming user-profile directory.
    pub roaming: bool,
}
