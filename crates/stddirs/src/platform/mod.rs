//! Per-platform directory catalogs.
//!
//! One module per supported operating system, selected at compile time. Each
//! module defines the cache and config catalogs in importance order, most
//! important first, plus the platform's path-list separator. The resolution
//! engine itself is platform-independent.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub(crate) use linux::{CACHE_ENTRIES, CONFIG_ENTRIES, LIST_SEPARATOR};

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub(crate) use macos::{CACHE_ENTRIES, CONFIG_ENTRIES, LIST_SEPARATOR};

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub(crate) use windows::{CACHE_ENTRIES, CONFIG_ENTRIES, LIST_SEPARATOR};

#[cfg(target_os = "openbsd")]
mod openbsd;
#[cfg(target_os = "openbsd")]
pub(crate) use openbsd::{CACHE_ENTRIES, CONFIG_ENTRIES, LIST_SEPARATOR};

#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "windows",
    target_os = "openbsd"
)))]
compile_error!("no standard directory catalog for this target OS");
