//! Catalog resolution: filtering, expansion, aggregation.
//!
//! The public entry points live here. Each one walks the compiled-in catalog
//! for the target OS, skips the entries the caller excluded, and expands the
//! rest in catalog order, so the returned list is sorted by importance with
//! the most important directory first.

use crate::dir::Dir;
use crate::expand::expand_template;
use crate::flags::Exclude;
use crate::platform;
use crate::template::DirTemplate;

/// Find the directories where the named program should keep cached data.
///
/// The list is sorted by importance, most important first, and may be empty
/// when nothing resolves. Nothing is read from or written to disk; whether a
/// directory exists is the caller's concern.
///
/// Resolution order per platform:
///
/// **Linux**
/// 1. `${XDG_CACHE_HOME}/<program>`, or `${HOME}/.cache/<program>` when
///    `XDG_CACHE_HOME` is unset
/// 2. `/var/cache/<program>`
///
/// **macOS**
/// 1. `${HOME}/Library/Caches/<program>`
/// 2. `/Library/Caches/<program>`
///
/// **Windows**
/// 1. `%LOCALAPPDATA%\<program>\cache`
/// 2. `%ProgramData%\<program>\cache`
///
/// **OpenBSD**
/// 1. `${HOME}/.<program>/cache`
/// 2. `/var/cache/<program>`
///
/// # Examples
///
/// ```
/// use stddirs::{Exclude, cache_dirs};
///
/// for dir in cache_dirs("foobar", Exclude::SYSTEM) {
///     println!("{} (user: {})", dir.path.display(), dir.user);
/// }
/// ```
pub fn cache_dirs(program: &str, exclude: Exclude) -> Vec<Dir> {
    resolve_catalog(program, platform::CACHE_ENTRIES, exclude)
}

/// Find the directories where configuration for the named program is stored.
///
/// The list is sorted by importance, most important first, and may be empty
/// when nothing resolves. Nothing is read from or written to disk.
///
/// Resolution order per platform:
///
/// **Linux**
/// 1. `${XDG_CONFIG_HOME}/<program>`, or `${HOME}/.config/<program>` when
///    `XDG_CONFIG_HOME` is unset
/// 2. One entry per element of `${XDG_CONFIG_DIRS}`, or `/etc/xdg/<program>`
///    when it is unset
/// 3. `/etc/<program>`
///
/// **macOS**
/// 1. `${HOME}/Library/Application Support/<program>`
/// 2. `/Library/Application Support/<program>`
///
/// **Windows**
/// 1. `%APPDATA%\<program>` (roaming)
/// 2. `%LOCALAPPDATA%\<program>`
/// 3. `%ProgramData%\<program>`
///
/// **OpenBSD**
/// 1. `${HOME}/.<program>`
/// 2. `/etc/<program>`
///
/// # Examples
///
/// ```
/// use stddirs::{Exclude, config_dirs};
///
/// let dirs = config_dirs("foobar", Exclude::empty());
/// if let Some(most_important) = dirs.first() {
///     println!("reading config from {}", most_important.path.display());
/// }
/// ```
pub fn config_dirs(program: &str, exclude: Exclude) -> Vec<Dir> {
    resolve_catalog(program, platform::CONFIG_ENTRIES, exclude)
}

/// Expand a whole catalog: skip excluded entries, expand the survivors,
/// keep catalog order. Entries that fail to resolve contribute nothing.
pub(crate) fn resolve_catalog(
    program: &str,
    catalog: &[DirTemplate],
    exclude: Exclude,
) -> Vec<Dir> {
    let mut dirs = Vec::new();
    for entry in catalog {
        if (entry.roaming && exclude.roaming())
            || (entry.user && exclude.user())
            || (!entry.user && exclude.system())
        {
            continue;
        }
        dirs.extend(expand_template(program, entry));
    }
    dirs
}
