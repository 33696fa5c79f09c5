//! Property tests for the text normalizers.

use crmboard::normalize::{
    currency::{self, CurrencyFormatOptions},
    email, phone,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn phone_mask_preserves_the_first_eleven_digits(text in "[0-9 ()+.-]{0,24}") {
        let expected: String = phone::clean(&text).chars().take(11).collect();
        prop_assert_eq!(phone::clean(&phone::mask(&text)), expected);
    }

    #[test]
    fn phone_mask_is_idempotent(text in "\\PC{0,24}") {
        let masked = phone::mask(&text);
        prop_assert_eq!(phone::mask(&masked), masked);
    }

    #[test]
    fn phone_validity_follows_length_and_mobile_marker(digits in "[0-9]{0,13}") {
        let third = digits.chars().nth(2);
        let expected = match digits.len() {
            10 => third != Some('9'),
            11 => third == Some('9'),
            _ => false,
        };
        prop_assert_eq!(phone::is_valid(&digits), expected);
    }

    #[test]
    fn email_normalize_is_idempotent(text in "[ A-Za-z0-9@._%+-]{0,40}") {
        let normalized = email::normalize(&text);
        prop_assert_eq!(email::normalize(&normalized), normalized);
    }

    #[test]
    fn generated_addresses_are_valid(
        local in "[a-z0-9._%+-]{1,12}",
        host in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let address = format!("  {}@{}.{} ", local.to_uppercase(), host, tld);
        prop_assert!(email::is_valid(&email::normalize(&address)));
    }

    #[test]
    fn currency_parse_recovers_formatted_amounts(value in -1.0e12_f64..1.0e12_f64) {
        let options = CurrencyFormatOptions::default();
        let formatted = currency::format(value, options);
        prop_assert_eq!(currency::format(currency::parse(&formatted), options), formatted);
    }

    #[test]
    fn currency_mask_keeps_two_fraction_digits(digits in "[0-9]{1,15}") {
        let masked = currency::apply_mask(&digits);
        prop_assert!(masked.starts_with("R$ "));
        let fraction = masked.rsplit_once(',').map(|(_, cents)| cents.len());
        prop_assert_eq!(fraction, Some(2));
        prop_assert!(currency::is_valid(&masked));
    }
}
