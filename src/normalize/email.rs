//! Email address normalization, validation and typo suggestions.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Domains checked by [`suggest_correction`], in priority order.
pub const COMMON_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "yahoo.com",
    "outlook.com",
    "live.com",
    "icloud.com",
    "uol.com.br",
    "bol.com.br",
    "terra.com.br",
    "ig.com.br",
];

/// Largest distance at which a domain is considered a typo.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Trims surrounding whitespace and lowercases the address.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns `true` when the text looks like `local@domain.tld`.
///
/// The local part accepts `[A-Za-z0-9._%+-]`, the domain accepts
/// `[A-Za-z0-9.-]` and the final label must be at least two letters.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Returns the domain of a valid address, or an empty string.
#[must_use]
pub fn domain_of(text: &str) -> &str {
    if !is_valid(text) {
        return "";
    }
    text.split_once('@').map_or("", |(_, domain)| domain)
}

/// Proposes a corrected address when the domain looks like a typo of a
/// common provider.
///
/// # Examples
///
/// ```
/// use crmboard::normalize::email::suggest_correction;
///
/// assert_eq!(
///     suggest_correction("ana@gmial.com").as_deref(),
///     Some("ana@gmail.com")
/// );
/// assert_eq!(suggest_correction("ana@gmail.com"), None);
/// ```
#[must_use]
pub fn suggest_correction(text: &str) -> Option<String> {
    EmailSuggester::default().suggest(text)
}

/// Typo suggester over a configurable list of known domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSuggester {
    domains: Vec<String>,
    max_distance: usize,
}

impl Default for EmailSuggester {
    fn default() -> Self {
        Self::new(COMMON_DOMAINS.iter().copied())
    }
}

impl EmailSuggester {
    /// Creates a suggester over the given domains; earlier domains win ties.
    #[must_use]
    pub fn new<'a>(domains: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            domains: domains.into_iter().map(normalize).collect(),
            max_distance: MAX_SUGGESTION_DISTANCE,
        }
    }

    /// Returns the known domains in priority order.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Proposes `local@known-domain` when the address domain differs from,
    /// but is close to, a known domain.
    #[must_use]
    pub fn suggest(&self, text: &str) -> Option<String> {
        let (local, domain) = text.split_once('@')?;
        if local.is_empty() || domain.is_empty() {
            return None;
        }
        let lowered = domain.to_lowercase();
        if self.domains.iter().any(|known| *known == lowered) {
            return None;
        }

        self.domains
            .iter()
            .find(|known| positional_distance(&lowered, known) <= self.max_distance)
            .map(|known| format!("{local}@{known}"))
    }
}

/// Counts position-wise mismatches plus the length difference.
///
/// Returns `usize::MAX` when the lengths differ by more than the suggestion
/// threshold, so such candidates are never proposed.
fn positional_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let length_gap = a_len.abs_diff(b_len);
    if length_gap > MAX_SUGGESTION_DISTANCE {
        return usize::MAX;
    }
    let mismatches = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    mismatches.saturating_add(length_gap)
}

/// Email address in canonical (trimmed, lowercase) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Builds the canonical form of free-form input.
    #[must_use]
    pub fn from_input(text: &str) -> Self {
        Self(normalize(text))
    }

    /// Returns the canonical address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the address passes [`is_valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }

    /// Returns the domain of a valid address, or an empty string.
    #[must_use]
    pub fn domain(&self) -> &str {
        domain_of(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
