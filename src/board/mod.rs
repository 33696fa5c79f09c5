//! Task board bounded context.
//!
//! Columns hold ordered task references; a task's status is the column it
//! sits in. [`services::BoardSession`] owns one board for a user session.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
