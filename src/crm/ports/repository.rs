//! Repository ports for companies, contacts and interactions.

use crate::crm::domain::{
    Company, CompanyId, CompanyName, Contact, ContactId, Interaction, InteractionId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for CRM repository operations.
pub type CrmRepositoryResult<T> = Result<T, CrmRepositoryError>;

/// Company storage contract.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Stores a new company.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::Duplicate`] when the identifier exists.
    async fn store_company(&self, company: &Company) -> CrmRepositoryResult<()>;

    /// Replaces a stored company.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::NotFound`] when the company is missing.
    async fn update_company(&self, company: &Company) -> CrmRepositoryResult<()>;

    /// Removes a company and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::NotFound`] when the company is missing.
    async fn remove_company(&self, id: CompanyId) -> CrmRepositoryResult<Company>;

    /// Finds a company by identifier.
    async fn find_company(&self, id: CompanyId) -> CrmRepositoryResult<Option<Company>>;

    /// Returns every company whose name matches, in creation order.
    ///
    /// More than one result means the name is ambiguous.
    async fn find_companies_by_name(
        &self,
        name: &CompanyName,
    ) -> CrmRepositoryResult<Vec<Company>>;

    /// Returns all companies in creation order.
    async fn list_companies(&self) -> CrmRepositoryResult<Vec<Company>>;
}

/// Contact storage contract.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Stores a new contact.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::Duplicate`] when the identifier exists.
    async fn store_contact(&self, contact: &Contact) -> CrmRepositoryResult<()>;

    /// Replaces a stored contact.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::NotFound`] when the contact is missing.
    async fn update_contact(&self, contact: &Contact) -> CrmRepositoryResult<()>;

    /// Removes a contact and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::NotFound`] when the contact is missing.
    async fn remove_contact(&self, id: ContactId) -> CrmRepositoryResult<Contact>;

    /// Finds a contact by identifier.
    async fn find_contact(&self, id: ContactId) -> CrmRepositoryResult<Option<Contact>>;

    /// Returns contacts whose company reference matches the name, in
    /// creation order.
    async fn find_contacts_by_company(
        &self,
        company: &CompanyName,
    ) -> CrmRepositoryResult<Vec<Contact>>;

    /// Returns all contacts in creation order.
    async fn list_contacts(&self) -> CrmRepositoryResult<Vec<Contact>>;
}

/// Interaction storage contract.
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Stores a new interaction.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::Duplicate`] when the identifier exists.
    async fn store_interaction(&self, interaction: &Interaction) -> CrmRepositoryResult<()>;

    /// Replaces a stored interaction.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::NotFound`] when the interaction is
    /// missing.
    async fn update_interaction(&self, interaction: &Interaction) -> CrmRepositoryResult<()>;

    /// Removes an interaction and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CrmRepositoryError::NotFound`] when the interaction is
    /// missing.
    async fn remove_interaction(&self, id: InteractionId) -> CrmRepositoryResult<Interaction>;

    /// Finds an interaction by identifier.
    async fn find_interaction(
        &self,
        id: InteractionId,
    ) -> CrmRepositoryResult<Option<Interaction>>;

    /// Returns a contact's interactions in creation order.
    async fn find_interactions_by_contact(
        &self,
        contact: ContactId,
    ) -> CrmRepositoryResult<Vec<Interaction>>;
}

/// Combined storage contract used by the CRM service.
pub trait CrmRepository: CompanyRepository + ContactRepository + InteractionRepository {}

impl<T> CrmRepository for T where T: CompanyRepository + ContactRepository + InteractionRepository {}

/// Errors returned by CRM repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CrmRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate {entity} identifier: {id}")]
    Duplicate {
        /// Kind of record.
        entity: &'static str,
        /// Conflicting identifier.
        id: String,
    },

    /// The record was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record.
        entity: &'static str,
        /// Missing identifier.
        id: String,
    },

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CrmRepositoryError {
    /// Builds a [`Self::Duplicate`] error.
    pub fn duplicate(entity: &'static str, id: impl ToString) -> Self {
        Self::Duplicate {
            entity,
            id: id.to_string(),
        }
    }

    /// Builds a [`Self::NotFound`] error.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for [`Self::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
