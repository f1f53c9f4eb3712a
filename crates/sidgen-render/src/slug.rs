//! Project name normalization.

use std::fmt::Display;

use regex::Regex;

/// A filesystem- and URL-safe project identifier.
///
/// Always nonempty, matches `[a-z0-9_]+`, and carries no leading, trailing,
/// or repeated underscores. Only obtainable through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectSlug(String);

impl ProjectSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Derive a [`ProjectSlug`] from a free-text project name.
///
/// Lowercases, folds the Swedish vowels å/ä/ö to a/a/o (no other
/// transliteration), turns whitespace and other disallowed characters into
/// underscores, collapses underscore runs, and trims edge underscores.
///
/// Returns `None` when nothing usable remains; callers must treat that as a
/// hard failure rather than substituting a default name.
pub fn normalize(raw: &str) -> Option<ProjectSlug> {
    let lowered = raw.trim().to_lowercase();
    let folded = lowered
        .replace('å', "a")
        .replace('ä', "a")
        .replace('ö', "o");

    let whitespace = Regex::new(r"\s+").expect("whitespace pattern");
    let disallowed = Regex::new(r"[^a-z0-9_]+").expect("charset pattern");
    let repeats = Regex::new(r"_+").expect("underscore pattern");

    let spaced = whitespace.replace_all(&folded, "_");
    let cleaned = disallowed.replace_all(&spaced, "_");
    let collapsed = repeats.replace_all(&cleaned, "_");
    let slug = collapsed.trim_matches('_');

    if slug.is_empty() {
        None
    } else {
        Some(ProjectSlug(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_swedish_vowels() {
        let slug = normalize("Ångström Öl").unwrap();
        assert_eq!(slug.as_str(), "angstrom_ol");
    }

    #[test]
    fn result_stays_in_safe_charset() {
        let slug = normalize("Håll käften & lyssna (v2)!").unwrap();
        assert!(slug.as_str().chars().all(|c| c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c == '_'));
    }

    #[test]
    fn normalizes_punctuated_name() {
        let slug = normalize("  Väg-Lampa 2!! ").unwrap();
        assert_eq!(slug.as_str(), "vag_lampa_2");
    }

    #[test]
    fn collapses_underscore_runs() {
        let slug = normalize("a  -  b___c").unwrap();
        assert_eq!(slug.as_str(), "a_b_c");
    }

    #[test]
    fn whitespace_only_is_rejected() {
        assert!(normalize("   \t  ").is_none());
    }

    #[test]
    fn punctuation_only_is_rejected() {
        assert!(normalize("!!! ??? ...").is_none());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(normalize("").is_none());
    }

    #[test]
    fn already_clean_name_passes_through() {
        let slug = normalize("vaglampa").unwrap();
        assert_eq!(slug.as_str(), "vaglampa");
    }
}
