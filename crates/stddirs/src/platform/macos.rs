//! macOS catalog, using the conventional `Library` locations.

use crate::template::DirTemplate;

/// Separator for list-valued variables; no macOS entry uses one.
pub(crate) const LIST_SEPARATOR: char = ':';

/// Cache directories, most important first.
pub(crate) static CACHE_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: "${HOME}/Library/Caches/<program>",
        alt_path: None,
        list: false,
        user: true,
        roaming: false,
    },
    DirTemplate {
        path: "/Library/Caches/<program>",
        alt_path: None,
        list: false,
        user: false,
        roaming: false,
    },
];

/// Config directories, most important first.
pub(crate) static CONFIG_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: "${HOME}/Library/Application Support/<program>",
        alt_path: None,
        list: false,
        user: true,
        roaming: false,
    },
    DirTemplate {
        path: "/Library/Application Support/<program>",
        alt_path: None,
        list: false,
        user: false,
        roaming: false,
    },
];
