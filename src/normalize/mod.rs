//! Text normalizers and validators shared by every form.
//!
//! Each submodule converts free-form user input into a canonical value and,
//! where useful, a display mask. All functions are pure and total: invalid
//! input yields `false`, an empty string or a zero amount, never an error.
//!
//! - [`phone`]: digits-only phone numbers with `(DD) DDDDD-DDDD` masks
//! - [`email`]: lowercase addresses, pattern validation and typo suggestions
//! - [`currency`]: Brazilian Real formatting and cents-entry masks

pub mod currency;
pub mod email;
pub mod phone;

pub use email::EmailAddress;
pub use phone::{PhoneKind, PhoneNumber};

#[cfg(test)]
mod tests;
