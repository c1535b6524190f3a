//! User-configured ignore-line patterns.
//!
//! Each pattern is either written in delimited form (`/pattern/flags`) or as a bare pattern.
//! Every line on which a pattern match *starts* is exempt from error classification for the
//! current pass. The suppressed line set is recomputed from scratch on every pass.
//!
//! Flags: `i` (case-insensitive), `m` (multi-line anchors) and `s` (dot matches newline) are
//! honored; `g`, `u` and `y` are accepted and ignored. A string whose suffix after the last
//! `/` contains anything else is taken as a bare pattern.

use crate::char_index::CharIndex;
use crate::document::TextDocument;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

const ACCEPTED_FLAGS: &str = "gimsuy";

/// An ignore pattern that could not be compiled.
#[derive(Debug, Error)]
pub enum IgnorePatternError {
    /// The pattern body is not a valid regular expression.
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The pattern as configured.
        pattern: String,
        /// The regex compiler error.
        #[source]
        source: regex::Error,
    },
}

/// A compiled ignore-line pattern.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    regex: Regex,
}

impl IgnorePattern {
    /// Parse a configured pattern string.
    pub fn parse(raw: &str) -> Result<Self, IgnorePatternError> {
        let (body, flags) = split_delimited(raw).unwrap_or((raw, ""));
        let regex = RegexBuilder::new(body)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|source| IgnorePatternError::InvalidRegex {
                pattern: raw.to_string(),
                source,
            })?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    /// The pattern string as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The compiled regular expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Split `/body/flags` into `(body, flags)`; `None` if `raw` is not in delimited form.
fn split_delimited(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    if flags.chars().all(|flag| ACCEPTED_FLAGS.contains(flag)) {
        Some((body, flags))
    } else {
        None
    }
}

/// The full set of compiled ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<IgnorePattern>,
}

impl IgnorePatterns {
    /// Create a set from already compiled patterns.
    pub fn new(patterns: Vec<IgnorePattern>) -> Self {
        Self { patterns }
    }

    /// Compile every configured pattern.
    ///
    /// Invalid patterns are dropped and returned alongside the set; one bad pattern never
    /// disables the others.
    pub fn compile<I, S>(raw: I) -> (Self, Vec<IgnorePatternError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        let mut errors = Vec::new();
        for pattern in raw {
            match IgnorePattern::parse(pattern.as_ref()) {
                Ok(compiled) => patterns.push(compiled),
                Err(err) => {
                    warn!(target: "analysis.patterns", error = %err, "ignore_pattern_rejected");
                    errors.push(err);
                }
            }
        }
        (Self { patterns }, errors)
    }

    /// Compiled patterns, in configuration order.
    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    /// Returns `true` if no pattern is configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Zero-based line numbers on which any pattern match starts.
    pub fn suppressed_lines<D>(&self, document: &D) -> HashSet<usize>
    where
        D: TextDocument + ?Sized,
    {
        if self.patterns.is_empty() {
            return HashSet::new();
        }
        let text = document.text();
        let index = CharIndex::new(&text);
        self.suppressed_lines_in(&text, &index, document)
    }

    pub(crate) fn suppressed_lines_in<D>(
        &self,
        text: &str,
        index: &CharIndex,
        document: &D,
    ) -> HashSet<usize>
    where
        D: TextDocument + ?Sized,
    {
        let mut lines = HashSet::new();
        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                let offset = index.byte_to_char(m.start());
                lines.insert(document.position_at(offset).line);
            }
        }
        lines
    }
}
