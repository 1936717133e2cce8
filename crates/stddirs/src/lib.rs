#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod dir;
mod expand;
mod flags;
mod platform;
mod resolve;
mod template;

#[cfg(test)]
mod test_utils;

// ============================================================================
// Public API
// ============================================================================

// Resolved directories
pub use dir::Dir;

// Exclusion flags
pub use flags::Exclude;

// Entry points
pub use resolve::{cache_dirs, config_dirs};
