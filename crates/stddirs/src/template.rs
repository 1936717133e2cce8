//! Directory templates and placeholder scanning.
//!
//! A template is a path pattern that still contains placeholders: any number
//! of `${VAR}` environment references plus the `<program>` marker that every
//! shipped entry carries. Templates are plain data; the expansion logic lives
//! in [`crate::expand`].

/// Marker substituted with the caller-supplied program name.
pub(crate) const PROGRAM_PLACEHOLDER: &str = "<program>";

/// A single catalog row: one directory definition that may resolve into
/// zero or more concrete directories.
///
/// Rows are declared per platform in [`crate::platform`] and never built at
/// runtime.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DirTemplate {
    /// Path pattern; may contain `${VAR}` placeholders and `<program>`.
    pub(crate) path: &'static str,
    /// Alternative pattern, tried once when `path` hits an unset variable.
    pub(crate) alt_path: Option<&'static str>,
    /// Whether variables in the pattern may hold a separator-joined path list.
    pub(crate) list: bool,
    /// Per-user directory (`false` means system-wide).
    pub(crate) user: bool,
    /// Roaming user-profile directory.
    pub(crate) roaming: bool,
}

/// Byte span of a `${VAR}` placeholder inside a pattern.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Placeholder<'a> {
    /// Index of the `$`.
    pub(crate) start: usize,
    /// Index of the closing `}`, inclusive.
    pub(crate) end: usize,
    /// Variable name between the braces; empty for `${}`.
    pub(crate) name: &'a str,
}

/// Locate the first well-formed `${...}` placeholder in `pattern`.
///
/// The closing brace is the first `}` after the matched `${`, so a stray `}`
/// earlier in the string does not terminate anything. Returns `None` when no
/// `${` exists or the one found is never closed.
pub(crate) fn find_placeholder(pattern: &str) -> Option<Placeholder<'_>> {
    let start = pattern.find("${")?;
    let name_start = start + 2;
    let end = name_start + pattern[name_start..].find('}')?;
    Some(Placeholder {
        start,
        end,
        name: &pattern[name_start..end],
    })
}
