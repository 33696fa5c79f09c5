//! Brazilian phone number cleaning, masking and validation.
//!
//! Canonical phone numbers are digits only: a two-digit area code followed by
//! an eight-digit landline or a nine-digit mobile number. Mobile numbers are
//! recognised by a `9` immediately after the area code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of digits kept by [`mask`].
pub const MAX_DIGITS: usize = 11;

const LANDLINE_DIGITS: usize = 10;
const MOBILE_DIGITS: usize = 11;
const AREA_CODE_DIGITS: usize = 2;
const MOBILE_MARKER: char = '9';

/// Line category of a valid phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// Ten-digit fixed line.
    Landline,
    /// Eleven-digit mobile line with the `9` prefix.
    Mobile,
}

/// Strips every character that is not an ASCII digit.
#[must_use]
pub fn clean(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Formats free-form input as a display mask.
///
/// The input is cleaned and truncated to [`MAX_DIGITS`] digits, then shaped
/// by length: `(DD`, `(DD) DDDD`, `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`. The
/// result depends only on the truncated digits, so it can be recomputed on
/// every keystroke.
///
/// # Examples
///
/// ```
/// use crmboard::normalize::phone::mask;
///
/// assert_eq!(mask("11987654321"), "(11) 98765-4321");
/// assert_eq!(mask("113333"), "(11) 3333");
/// assert_eq!(mask(""), "");
/// ```
#[must_use]
pub fn mask(text: &str) -> String {
    let digits: String = clean(text).chars().take(MAX_DIGITS).collect();
    let len = digits.len();
    if len == 0 {
        return String::new();
    }

    let (area, rest) = digits.split_at(len.min(AREA_CODE_DIGITS));
    if len <= AREA_CODE_DIGITS {
        return format!("({area}");
    }
    if len <= 6 {
        return format!("({area}) {rest}");
    }

    // Mobile numbers carry a five-digit prefix, landlines four.
    let prefix_len = if len == MOBILE_DIGITS { 5 } else { 4 };
    let (prefix, suffix) = rest.split_at(prefix_len.min(rest.len()));
    format!("({area}) {prefix}-{suffix}")
}

/// Returns the line category when the input is a valid phone number.
#[must_use]
pub fn kind(text: &str) -> Option<PhoneKind> {
    let digits = clean(text);
    let third = digits.chars().nth(AREA_CODE_DIGITS);
    match (digits.len(), third) {
        (LANDLINE_DIGITS, Some(c)) if c != MOBILE_MARKER => Some(PhoneKind::Landline),
        (MOBILE_DIGITS, Some(MOBILE_MARKER)) => Some(PhoneKind::Mobile),
        _ => None,
    }
}

/// Returns `true` for ten-digit landlines whose third digit is not `9` and
/// eleven-digit mobiles whose third digit is `9`.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    kind(text).is_some()
}

/// Phone number in canonical digits-only form.
///
/// Holding a `PhoneNumber` guarantees normalization has been applied; it does
/// not guarantee the number is valid; see [`PhoneNumber::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Builds the canonical form of free-form input.
    #[must_use]
    pub fn from_input(text: &str) -> Self {
        Self(clean(text))
    }

    /// Returns the canonical digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no digits were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the digits form a valid landline or mobile number.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }

    /// Returns the display mask of the canonical digits.
    #[must_use]
    pub fn display(&self) -> String {
        mask(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
