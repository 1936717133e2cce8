//! Template expansion: from one catalog row to zero or more directories.
//!
//! Expansion substitutes the `<program>` marker, then resolves `${VAR}`
//! placeholders left to right against the process environment. An unset
//! variable either restarts the whole expansion from the row's fallback
//! pattern or silently drops the row, and a list-valued variable fans out
//! into one expansion per list element. An unresolvable row is a normal
//! outcome, never an error.

use std::env;

use crate::dir::Dir;
use crate::platform::LIST_SEPARATOR;
use crate::template::{DirTemplate, PROGRAM_PLACEHOLDER, find_placeholder};

/// Upper bound on substitutions per pattern, and on restart/fan-out depth.
///
/// The shipped catalogs need at most a handful of substitutions. The bound
/// exists so that an environment value which itself contains placeholder
/// syntax (including a cycle back to its own variable) ends in an empty
/// result instead of a hang or an exhausted stack.
const SUBSTITUTION_LIMIT: usize = 100;

/// Expand one catalog row for `program`.
///
/// Returns the concrete directories in expansion order: none when a variable
/// cannot be resolved, one in the common case, several when a list-valued
/// variable fans out.
pub(crate) fn expand_template(program: &str, template: &DirTemplate) -> Vec<Dir> {
    expand(program, template.path, template.alt_path, template, 0)
}

/// Recursive worker behind [`expand_template`].
///
/// `pattern` is the pattern currently being resolved: the row's primary
/// path, its fallback after a restart, or a derived per-element pattern
/// during list fan-out. `alt_path` is the fallback still available to this
/// expansion, if any. `depth` counts restarts and fan-outs toward
/// [`SUBSTITUTION_LIMIT`].
fn expand(
    program: &str,
    pattern: &str,
    alt_path: Option<&str>,
    template: &DirTemplate,
    depth: usize,
) -> Vec<Dir> {
    if depth > SUBSTITUTION_LIMIT {
        tracing::warn!(
            pattern = template.path,
            limit = SUBSTITUTION_LIMIT,
            "Expansion depth limit reached, dropping directory template"
        );
        return Vec::new();
    }

    let mut path = pattern.replace(PROGRAM_PLACEHOLDER, program);

    for _ in 0..SUBSTITUTION_LIMIT {
        // Scan and look up in one step, so nothing borrows `path` once a
        // branch starts moving or mutating it.
        let step = find_placeholder(&path)
            .map(|found| (found.start, found.end, non_empty_var(found.name)));

        let Some((start, end, value)) = step else {
            // Fully resolved.
            return vec![Dir {
                path: path.into(),
                user: template.user,
                roaming: template.roaming,
            }];
        };

        let Some(value) = value else {
            // Unset variable: restart from the fallback pattern if one is
            // left, otherwise the row resolves to nothing. The fallback
            // itself has no further fallback.
            return match alt_path {
                Some(alt) => expand(program, alt, None, template, depth + 1),
                None => Vec::new(),
            };
        };

        if template.list && value.contains(LIST_SEPARATOR) {
            // Fan out into one derived pattern per list element, results
            // concatenated in element order. A later list-valued placeholder
            // recurses through this same branch, which yields the cartesian
            // product ordered by the leftmost placeholder first.
            let mut dirs = Vec::new();
            for part in value.split(LIST_SEPARATOR) {
                let mut derived = path.clone();
                derived.replace_range(start..=end, part);
                dirs.extend(expand(program, &derived, alt_path, template, depth + 1));
            }
            return dirs;
        }

        path.replace_range(start..=end, &value);
    }

    tracing::warn!(
        pattern = template.path,
        limit = SUBSTITUTION_LIMIT,
        "Substitution limit reached, dropping directory template"
    );
    Vec::new()
}

/// Environment lookup with the crate's unset semantics: a variable set to
/// the empty string counts as unset.
fn non_empty_var(name: &str) -> Option<String> {
    // `env::var` may panic on these names, and none of them can name a
    // variable that is actually set.
    if name.is_empty() || name.contains(['=', '\0']) {
        return None;
    }
    env::var(name).ok().filter(|value| !value.is_empty())
}
