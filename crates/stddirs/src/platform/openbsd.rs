//! OpenBSD catalog. The base system has no XDG convention; programs keep a
//! dot-directory under `$HOME` and system files under `/etc` and
//! `/var/cache`.

use crate::template::DirTemplate;

/// Separator for list-valued variables; no OpenBSD entry uses one.
pub(crate) const LIST_SEPARATOR: char = ':';

/// Cache directories, most important first.
pub(crate) static CACHE_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: "${HOME}/.<program>/cache",
        alt_path: None,
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
        path: "${HOME}/.<program>",
        alt_path: None,
        list: false,
        user: true,
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
