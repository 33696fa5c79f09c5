//! CRM entity graph: companies, contacts and interactions.
//!
//! A contact refers to its company by name; a company groups the contacts
//! that name it; every interaction belongs to exactly one contact. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Form rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
