//! Port contracts for CRM record storage.
//!
//! Ports define infrastructure-agnostic interfaces used by CRM services.

pub mod repository;

pub use repository::{
    CompanyRepository, ContactRepository, CrmRepository, CrmRepositoryError,
    CrmRepositoryResult, InteractionRepository,
};
