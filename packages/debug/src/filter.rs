//! Filter patterns.
//!
//! A pattern enables a name when either
//!
//! 1. the lowercased name starts with the lowercased pattern, or
//! 2. the whole name matches the pattern with every `*` (and a separator
//!    directly in front of it) standing for any run of characters.
//!
//! The prefix check runs first, so `test` enables `testing` as well as
//! `test:child`.
//!
//! Everything other than `*` is literal text: `(`, `|`, `.` and other regex
//! metacharacters only match themselves.

use regex::{Regex, RegexBuilder};

/// A compiled filter pattern.
#[derive(Debug, Clone)]
pub struct Filter {
    pattern: String,
    prefix: String,
    wildcard: Option<Regex>,
}

impl Filter {
    #[must_use]
    pub fn new(pattern: &str, separator: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            prefix: pattern.to_lowercase(),
            wildcard: compile_wildcard(pattern, separator),
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if name.to_lowercase().starts_with(&self.prefix) {
            return true;
        }

        self.wildcard.as_ref().is_some_and(|re| re.is_match(name))
    }
}

/// Without a `*` the anchored pattern can only match names equal to it,
/// which the prefix check already covers.
fn compile_wildcard(pattern: &str, separator: &str) -> Option<Regex> {
    if !pattern.contains('*') {
        return None;
    }

    let source = format!("^(?:{})$", wildcard_source(pattern, separator));

    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Failed to compile filter pattern '{pattern}': {e}");
            None
        }
    }
}

/// A separator of several characters is dropped as a whole before `*`,
/// never just its last character.
fn wildcard_source(pattern: &str, separator: &str) -> String {
    let pieces = pattern.split('*').collect::<Vec<_>>();
    let last = pieces.len() - 1;

    pieces
        .iter()
        .enumerate()
        .map(|(i, &piece)| {
            let piece = if i < last && !separator.is_empty() {
                piece.strip_suffix(separator).unwrap_or(piece)
            } else {
                piece
            };
            regex::escape(piece)
        })
        .collect::<Vec<_>>()
        .join(".*")
}
