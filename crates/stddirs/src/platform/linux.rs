//! Linux catalog, following the XDG Base Directory Specification.
//!
//! <https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html>

use crate::template::DirTemplate;

/// Separator for list-valued variables such as `XDG_CONFIG_DIRS`.
pub(crate) const LIST_SEPARATOR: char = ':';

/// Cache directories, most important first.
pub(crate) static CACHE_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: "${XDG_CACHE_HOME}/<program>",
        alt_path: Some("${HOME}/.cache/<program>"),
        list: false,
        user: true,
        roaming: false,
    },
    DirTemplate {
        path: "/var/cache/<program>",
        alt_path: None,
        list: false,
        user: false,
        roaming: false,
    },
];

/// Config directories, most important first.
pub(crate) static CONFIG_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: "${XDG_CONFIG_HOME}/<program>",
        alt_path: Some("${HOME}/.config/<program>"),
        list: false,
        user: true,
        roaming: false,
    },
    DirTemplate {
        path: "${XDG_CONFIG_DIRS}/<program>",
        alt_path: Some("/etc/xdg/<program>"),
        list: true,
        user: false,
        roaming: false,
    },
    DirTemplate {
        path: "/etc/<program>",
        alt_path: None,
        list: false,
        user: false,
        roaming: false,
    },
];
