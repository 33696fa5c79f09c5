//! Service layer for creating, updating and querying CRM records.

use crate::crm::{
    domain::{
        Company, CompanyId, CompanyName, CompanyPatch, Contact, ContactId, ContactPatch,
        Interaction, InteractionId, InteractionPatch, NewCompany, NewContact, NewInteraction,
    },
    ports::{CrmRepository, CrmRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for CRM operations.
#[derive(Debug, Error)]
pub enum CrmServiceError {
    /// An interaction referenced a contact that does not exist.
    #[error("contact not found: {0}")]
    UnknownContact(ContactId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CrmRepositoryError),
}

/// Result type for CRM service operations.
pub type CrmServiceResult<T> = Result<T, CrmServiceError>;

/// CRM record orchestration service.
///
/// Inputs are expected to have passed the form rules in
/// [`crate::crm::validation`]; the service does not re-normalize them.
///
/// Each operation performs every repository read before its first write, so
/// a failed lookup leaves storage untouched. The writes themselves are not
/// transactional: a storage failure part-way through a multi-record write
/// may leave the earlier records written.
#[derive(Clone)]
pub struct CrmService<R, C>
where
    R: CrmRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CrmService<R, C>
where
    R: CrmRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new CRM service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a company and groups the existing contacts that name it.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn create_company(&self, data: NewCompany) -> CrmServiceResult<Company> {
        let mut company = Company::new(data, &*self.clock);
        for contact in self.repository.find_contacts_by_company(company.name()).await? {
            company.attach_contact(contact.id());
        }
        self.repository.store_company(&company).await?;
        tracing::info!(company_id = %company.id(), name = %company.name(), "company created");
        Ok(company)
    }

    /// Merges a partial update into a stored company.
    ///
    /// Renaming regroups contacts under the new name; contacts keep their
    /// own company reference.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the company is missing or
    /// storage fails.
    pub async fn update_company(
        &self,
        id: CompanyId,
        patch: CompanyPatch,
    ) -> CrmServiceResult<Company> {
        let mut company = self.require_company(id).await?;
        let renamed = patch
            .name
            .as_ref()
            .is_some_and(|name| name != company.name());
        company.apply(patch);
        if renamed {
            for stale in company.contacts().to_vec() {
                company.detach_contact(stale);
            }
            for contact in self.repository.find_contacts_by_company(company.name()).await? {
                company.attach_contact(contact.id());
            }
        }
        self.repository.update_company(&company).await?;
        Ok(company)
    }

    /// Deletes a company. Contacts naming it are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the company is missing or
    /// storage fails.
    pub async fn delete_company(&self, id: CompanyId) -> CrmServiceResult<Company> {
        let company = self.repository.remove_company(id).await?;
        tracing::info!(company_id = %id, "company deleted");
        Ok(company)
    }

    /// Finds a company by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn find_company(&self, id: CompanyId) -> CrmServiceResult<Option<Company>> {
        Ok(self.repository.find_company(id).await?)
    }

    /// Lists companies in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn list_companies(&self) -> CrmServiceResult<Vec<Company>> {
        Ok(self.repository.list_companies().await?)
    }

    /// Creates a contact and groups it under every company with a matching
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn create_contact(&self, data: NewContact) -> CrmServiceResult<Contact> {
        let contact = Contact::new(data, &*self.clock);
        let regrouped = self
            .regroup(contact.id(), None, Some(contact.company()))
            .await?;
        self.repository.store_contact(&contact).await?;
        self.save_companies(&regrouped).await?;
        tracing::info!(contact_id = %contact.id(), company = %contact.company(), "contact created");
        Ok(contact)
    }

    /// Merges a partial update into a stored contact.
    ///
    /// A company change moves the contact between company groupings; a name
    /// change refreshes the denormalized name on its interactions.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the contact is missing or
    /// storage fails.
    pub async fn update_contact(
        &self,
        id: ContactId,
        patch: ContactPatch,
    ) -> CrmServiceResult<Contact> {
        let mut contact = self.require_contact(id).await?;
        let previous_company = contact.company().clone();
        let previous_name = contact.name().to_owned();
        contact.apply(patch);

        let regrouped = if *contact.company() == previous_company {
            Vec::new()
        } else {
            self.regroup(id, Some(&previous_company), Some(contact.company()))
                .await?
        };
        let mut renamed = if contact.name() == previous_name {
            Vec::new()
        } else {
            self.repository.find_interactions_by_contact(id).await?
        };
        for interaction in &mut renamed {
            interaction.rename_contact(contact.name());
        }

        self.repository.update_contact(&contact).await?;
        self.save_companies(&regrouped).await?;
        for interaction in &renamed {
            self.repository.update_interaction(interaction).await?;
        }
        Ok(contact)
    }

    /// Adds a tag to a contact. Adding an existing tag changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the contact is missing or
    /// storage fails.
    pub async fn add_contact_tag(&self, id: ContactId, tag: &str) -> CrmServiceResult<Contact> {
        let mut contact = self.require_contact(id).await?;
        if contact.add_tag(tag) {
            self.repository.update_contact(&contact).await?;
        } else {
            tracing::debug!(contact_id = %id, tag, "tag add skipped");
        }
        Ok(contact)
    }

    /// Removes a tag from a contact. Removing an absent tag changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the contact is missing or
    /// storage fails.
    pub async fn remove_contact_tag(
        &self,
        id: ContactId,
        tag: &str,
    ) -> CrmServiceResult<Contact> {
        let mut contact = self.require_contact(id).await?;
        if contact.remove_tag(tag) {
            self.repository.update_contact(&contact).await?;
        } else {
            tracing::debug!(contact_id = %id, tag, "tag remove skipped");
        }
        Ok(contact)
    }

    /// Deletes a contact together with its interactions.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the contact is missing or
    /// storage fails.
    pub async fn delete_contact(&self, id: ContactId) -> CrmServiceResult<Contact> {
        let stored = self.require_contact(id).await?;
        let interactions = self.repository.find_interactions_by_contact(id).await?;
        let regrouped = self.regroup(id, Some(stored.company()), None).await?;

        let contact = self.repository.remove_contact(id).await?;
        for interaction in &interactions {
            self.repository.remove_interaction(interaction.id()).await?;
        }
        self.save_companies(&regrouped).await?;
        tracing::info!(
            contact_id = %id,
            interactions = interactions.len(),
            "contact deleted"
        );
        Ok(contact)
    }

    /// Finds a contact by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn find_contact(&self, id: ContactId) -> CrmServiceResult<Option<Contact>> {
        Ok(self.repository.find_contact(id).await?)
    }

    /// Lists contacts in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn list_contacts(&self) -> CrmServiceResult<Vec<Contact>> {
        Ok(self.repository.list_contacts().await?)
    }

    /// Returns the contacts whose company reference matches `name`.
    ///
    /// Contacts of distinct companies that share a name are all returned.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn contacts_for_company(
        &self,
        name: &CompanyName,
    ) -> CrmServiceResult<Vec<Contact>> {
        Ok(self.repository.find_contacts_by_company(name).await?)
    }

    /// Logs an interaction against an existing contact.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::UnknownContact`] when the contact does not
    /// exist, or [`CrmServiceError::Repository`] when storage fails.
    pub async fn create_interaction(
        &self,
        data: NewInteraction,
    ) -> CrmServiceResult<Interaction> {
        let contact = self
            .repository
            .find_contact(data.contact_id)
            .await?
            .ok_or(CrmServiceError::UnknownContact(data.contact_id))?;
        let interaction = Interaction::new(data, contact.name(), &*self.clock);
        self.repository.store_interaction(&interaction).await?;
        tracing::info!(
            interaction_id = %interaction.id(),
            contact_id = %contact.id(),
            kind = %interaction.kind(),
            "interaction logged"
        );
        Ok(interaction)
    }

    /// Merges a partial update into a stored interaction.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the interaction is
    /// missing or storage fails.
    pub async fn update_interaction(
        &self,
        id: InteractionId,
        patch: InteractionPatch,
    ) -> CrmServiceResult<Interaction> {
        let mut interaction = self
            .repository
            .find_interaction(id)
            .await?
            .ok_or_else(|| CrmRepositoryError::not_found("interaction", id))?;
        interaction.apply(patch);
        self.repository.update_interaction(&interaction).await?;
        Ok(interaction)
    }

    /// Deletes an interaction.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when the interaction is
    /// missing or storage fails.
    pub async fn delete_interaction(&self, id: InteractionId) -> CrmServiceResult<Interaction> {
        Ok(self.repository.remove_interaction(id).await?)
    }

    /// Returns a contact's interactions in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CrmServiceError::Repository`] when storage fails.
    pub async fn interactions_for_contact(
        &self,
        id: ContactId,
    ) -> CrmServiceResult<Vec<Interaction>> {
        Ok(self.repository.find_interactions_by_contact(id).await?)
    }

    async fn require_company(&self, id: CompanyId) -> CrmServiceResult<Company> {
        self.repository
            .find_company(id)
            .await?
            .ok_or_else(|| CrmRepositoryError::not_found("company", id).into())
    }

    async fn require_contact(&self, id: ContactId) -> CrmServiceResult<Contact> {
        self.repository
            .find_contact(id)
            .await?
            .ok_or_else(|| CrmRepositoryError::not_found("contact", id).into())
    }

    /// Moves a contact from the companies named `from` to those named `to`
    /// and returns the companies whose grouping changed. Nothing is written.
    async fn regroup(
        &self,
        contact: ContactId,
        from: Option<&CompanyName>,
        to: Option<&CompanyName>,
    ) -> CrmServiceResult<Vec<Company>> {
        let mut changed = Vec::new();
        if let Some(name) = from {
            for mut company in self.repository.find_companies_by_name(name).await? {
                if company.detach_contact(contact) {
                    changed.push(company);
                }
            }
        }
        if let Some(name) = to {
            for mut company in self.repository.find_companies_by_name(name).await? {
                if company.attach_contact(contact) {
                    changed.push(company);
                }
            }
        }
        Ok(changed)
    }

    async fn save_companies(&self, companies: &[Company]) -> CrmServiceResult<()> {
        for company in companies {
            self.repository.update_company(company).await?;
        }
        Ok(())
    }
}
