//! Windows catalog, built on the Known Folders exposed through the
//! environment: `APPDATA` (roaming), `LOCALAPPDATA` and `ProgramData`.

use crate::template::DirTemplate;

/// Separator for list-valued variables, as used in `PATH`.
pub(crate) const LIST_SEPARATOR: char = ';';

/// Cache directories, most important first.
pub(crate) static CACHE_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: r"${LOCALAPPDATA}\<program>\cache",
        alt_path: None,
        list: false,
        user: true,
        roaming: false,
    },
    DirTemplate {
        path: r"${ProgramData}\<program>\cache",
        alt_path: None,
        list: false,
        user: false,
        roaming: false,
    },
];

/// Config directories, most important first. The roaming `APPDATA` location
/// outranks the machine-local one.
pub(crate) static CONFIG_ENTRIES: &[DirTemplate] = &[
    DirTemplate {
        path: r"${APPDATA}\<program>",
        alt_path: None,
        list: false,
        user: true,
        roaming: true,
    },
    DirTemplate {
        path: r"${LOCALAPPDATA}\<program>",
        alt_path: None,
        list: false,
        user: true,
        roaming: false,
    },
    DirTemplate {
        path: r"${ProgramData}\<program>",
        alt_path: None,
        list: false,
        user: false,
        roaming: false,
    },
];
