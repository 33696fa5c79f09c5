//! Brazilian Real formatting, parsing and cents-entry masking.
//!
//! Formatting follows the `pt-BR` convention: `R$` symbol, period thousands
//! separator and comma decimal separator. None of these functions fail; bad
//! input degrades to a zero amount.

use std::iter;

/// Currency symbol prepended by [`format`].
pub const SYMBOL: &str = "R$";

/// Largest fraction-digit count accepted by [`CurrencyFormatOptions`].
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Options controlling [`format`].
///
/// # Examples
///
/// ```
/// use crmboard::normalize::currency::{CurrencyFormatOptions, format};
///
/// assert_eq!(format(1234.5, CurrencyFormatOptions::default()), "R$ 1.234,50");
/// assert_eq!(format(1234.6, CurrencyFormatOptions::whole_units()), "R$ 1.235");
/// assert_eq!(format(1234.5, CurrencyFormatOptions::default().without_symbol()), "1.234,50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatOptions {
    /// Minimum number of fraction digits shown.
    pub min_fraction_digits: u8,
    /// Maximum number of fraction digits shown; the value is rounded to it.
    pub max_fraction_digits: u8,
    /// Whether the `R$` symbol is prepended.
    pub show_symbol: bool,
}

impl Default for CurrencyFormatOptions {
    fn default() -> Self {
        Self {
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            show_symbol: true,
        }
    }
}

impl CurrencyFormatOptions {
    /// Options rounding to whole reais.
    #[must_use]
    pub const fn whole_units() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            show_symbol: true,
        }
    }

    /// Returns the same options with the symbol suppressed.
    #[must_use]
    pub const fn without_symbol(mut self) -> Self {
        self.show_symbol = false;
        self
    }

    /// Returns `(min, max)` clamped to `0..=20`, or `None` when `min > max`.
    fn fraction_bounds(self) -> Option<(usize, usize)> {
        let min = self.min_fraction_digits.min(MAX_FRACTION_DIGITS);
        let max = self.max_fraction_digits.min(MAX_FRACTION_DIGITS);
        (min <= max).then_some((usize::from(min), usize::from(max)))
    }
}

/// Formats a value as Brazilian Real.
///
/// Non-finite values and inconsistent options fall back to `R$ 0,00`
/// (`0,00` without the symbol).
#[must_use]
pub fn format(value: f64, options: CurrencyFormatOptions) -> String {
    try_format(value, options).unwrap_or_else(|| {
        tracing::debug!(value, "currency format degraded to zero");
        fallback(options.show_symbol)
    })
}

fn try_format(value: f64, options: CurrencyFormatOptions) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let (min, max) = options.fraction_bounds()?;

    let (integer, fraction) = round_half_up(value.abs(), max);

    let mut shown_fraction = fraction;
    while shown_fraction.len() > min && shown_fraction.ends_with('0') {
        shown_fraction.pop();
    }

    let is_zero = integer
        .chars()
        .chain(shown_fraction.chars())
        .all(|c| c == '0');
    let mut out = String::with_capacity(integer.len().saturating_add(max).saturating_add(8));
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    if options.show_symbol {
        out.push_str(SYMBOL);
        out.push(' ');
    }
    out.push_str(&group_thousands(&integer));
    if !shown_fraction.is_empty() {
        out.push(',');
        out.push_str(&shown_fraction);
    }
    Some(out)
}

/// Rounds a non-negative value to `places` fraction digits, ties away from
/// zero.
///
/// Works on the shortest decimal text of the value, so `1.005` rounds to
/// `1.01` even though its binary value lies just below the tie.
fn round_half_up(value: f64, places: usize) -> (String, String) {
    let shortest = format!("{value}");
    let (integer, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(iter::repeat(b'0')).take(places))
        .collect();
    if fraction.as_bytes().get(places).is_some_and(|next| *next >= b'5') {
        carry_one(&mut digits);
    }

    let split = digits.len().saturating_sub(places);
    let (whole, cents) = digits.split_at(split);
    (ascii_text(whole), ascii_text(cents))
}

/// Adds one unit in the last place of a decimal digit string.
fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit = digit.saturating_add(1);
            return;
        }
    }
    digits.insert(0, b'1');
}

fn ascii_text(digits: &[u8]) -> String {
    digits.iter().copied().map(char::from).collect()
}

fn group_thousands(integer: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut groups: Vec<String> = digits
        .rchunks(3)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.join(".")
}

fn fallback(show_symbol: bool) -> String {
    if show_symbol {
        format!("{SYMBOL} 0,00")
    } else {
        "0,00".to_owned()
    }
}

/// Parses a formatted amount back into a number.
///
/// Everything except digits, commas and minus signs is discarded, the comma
/// becomes the decimal point, and the longest numeric prefix is read. Input
/// without a readable number yields `0.0`.
///
/// # Examples
///
/// ```
/// use crmboard::normalize::currency::parse;
///
/// assert!((parse("R$ 1.234,56") - 1234.56).abs() < 1e-9);
/// assert!((parse("-R$ 3,10") + 3.1).abs() < 1e-9);
/// assert!(parse("abc").abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn parse(text: &str) -> f64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '-')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    numeric_prefix(&kept)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Returns the longest `-?digits(.digits)?` prefix containing a digit.
fn numeric_prefix(text: &str) -> Option<&str> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (index, c) in text.char_indices() {
        match c {
            '-' if index == 0 => {}
            '.' if !seen_point => seen_point = true,
            d if d.is_ascii_digit() => seen_digit = true,
            _ => break,
        }
        end = index.saturating_add(c.len_utf8());
    }
    if !seen_digit {
        return None;
    }
    text.get(..end).map(|prefix| prefix.trim_end_matches('.'))
}

/// Formats typed digits as an amount in cents.
///
/// Only digits are kept; they are read as an integer number of cents, so the
/// display grows from the right like a cents-entry keypad. Empty input
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use crmboard::normalize::currency::apply_mask;
///
/// assert_eq!(apply_mask("12345"), "R$ 123,45");
/// assert_eq!(apply_mask("R$ 1,2"), "R$ 0,12");
/// assert_eq!(apply_mask(""), "");
/// ```
#[must_use]
pub fn apply_mask(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    format(cents_to_value(&digits), CurrencyFormatOptions::default())
}

/// Reads a digit string as cents by placing the decimal point two digits
/// from the right.
fn cents_to_value(digits: &str) -> f64 {
    let padded = format!("{digits:0>3}");
    let split = padded.len().saturating_sub(2);
    let (units, cents) = padded.split_at(split);
    format!("{units}.{cents}").parse::<f64>().unwrap_or(0.0)
}

/// Returns `true` when the text contains a digit and parses to a finite
/// amount.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit()) && parse(text).is_finite()
}
