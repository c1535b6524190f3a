#![warn(missing_docs)]
//! `indent-rainbow-lang` - data-driven language policy for `indent-rainbow`.
//!
//! This crate stays dependency free. It turns the configured include, exclude and
//! ignore-error language lists into a [`LanguagePolicy`] per language identifier and memoizes the
//! result in a [`LanguagePolicyCache`]. A configuration change is handled by building a new cache;
//! entries are never invalidated one by one.

use std::collections::HashMap;

/// Wildcard accepted in the ignore-error language list: matches every language.
pub const ALL_LANGUAGES: &str = "*";

/// The configured language lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageLists {
    /// If non-empty, only these languages are decorated.
    pub included: Vec<String>,
    /// Languages that are never decorated.
    pub excluded: Vec<String>,
    /// Languages decorated without error markers; may contain [`ALL_LANGUAGES`].
    pub ignore_errors: Vec<String>,
}

impl LanguageLists {
    /// Create lists from owned or borrowed identifiers.
    pub fn new<I, E, G, S>(included: I, excluded: E, ignore_errors: G) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            included: included.into_iter().map(Into::into).collect(),
            excluded: excluded.into_iter().map(Into::into).collect(),
            ignore_errors: ignore_errors.into_iter().map(Into::into).collect(),
        }
    }
}

fn contains(list: &[String], language_id: &str) -> bool {
    list.iter().any(|entry| entry == language_id)
}

/// Decoration policy for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguagePolicy {
    /// Whether documents in this language are decorated at all.
    pub should_decorate: bool,
    /// Whether error classification is skipped (frames only).
    pub skip_all_errors: bool,
}

impl LanguagePolicy {
    /// Derive the policy for `language_id` from `lists`.
    ///
    /// A non-empty include list that lacks `language_id` excludes it, and so does an exclude list
    /// that contains it; either list alone is enough.
    pub fn derive(lists: &LanguageLists, language_id: &str) -> Self {
        let not_included = !lists.included.is_empty() && !contains(&lists.included, language_id);
        let excluded = !lists.excluded.is_empty() && contains(&lists.excluded, language_id);
        let skip_all_errors = contains(&lists.ignore_errors, language_id)
            || contains(&lists.ignore_errors, ALL_LANGUAGES);

        Self {
            should_decorate: !not_included && !excluded,
            skip_all_errors,
        }
    }
}

/// Memoized [`LanguagePolicy`] lookups for one configuration.
#[derive(Debug, Clone, Default)]
pub struct LanguagePolicyCache {
    lists: LanguageLists,
    entries: HashMap<String, LanguagePolicy>,
}

impl LanguagePolicyCache {
    /// Create an empty cache over `lists`.
    pub fn new(lists: LanguageLists) -> Self {
        Self {
            lists,
            entries: HashMap::new(),
        }
    }

    /// Return the cached policy for `language_id`, computing it on first use.
    pub fn get_for_language(&mut self, language_id: &str) -> LanguagePolicy {
        if let Some(policy) = self.entries.get(language_id) {
            return *policy;
        }
        let policy = LanguagePolicy::derive(&self.lists, language_id);
        self.entries.insert(language_id.to_string(), policy);
        policy
    }

    /// Number of cached languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no language was looked up yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lists this cache was built from.
    pub fn lists(&self) -> &LanguageLists {
        &self.lists
    }
}
