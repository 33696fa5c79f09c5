//! Thread-safe in-memory CRM repository.
//!
//! Records live for the lifetime of the repository value, which makes it the
//! session-scoped store for dashboards without a backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::crm::{
    domain::{Company, CompanyId, CompanyName, Contact, ContactId, Interaction, InteractionId},
    ports::{
        CompanyRepository, ContactRepository, CrmRepositoryError, CrmRepositoryResult,
        InteractionRepository,
    },
};

/// In-memory repository implementing every CRM port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCrmRepository {
    state: Arc<RwLock<InMemoryCrmState>>,
}

#[derive(Debug, Default)]
struct InMemoryCrmState {
    companies: Table<CompanyId, Company>,
    contacts: Table<ContactId, Contact>,
    interactions: Table<InteractionId, Interaction>,
}

/// Keyed rows that remember insertion order.
#[derive(Debug)]
struct Table<K, V> {
    rows: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash, V: Clone> Table<K, V> {
    fn insert(&mut self, key: K, value: V) -> bool {
        if self.rows.contains_key(&key) {
            return false;
        }
        self.rows.insert(key, value);
        self.order.push(key);
        true
    }

    fn replace(&mut self, key: K, value: V) -> bool {
        self.rows.get_mut(&key).map(|slot| *slot = value).is_some()
    }

    fn remove(&mut self, key: K) -> Option<V> {
        let value = self.rows.remove(&key)?;
        self.order.retain(|existing| *existing != key);
        Some(value)
    }

    fn get(&self, key: K) -> Option<V> {
        self.rows.get(&key).cloned()
    }

    fn select(&self, predicate: impl Fn(&V) -> bool) -> Vec<V> {
        self.order
            .iter()
            .filter_map(|key| self.rows.get(key))
            .filter(|value| predicate(value))
            .cloned()
            .collect()
    }
}

impl InMemoryCrmRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CrmRepositoryResult<RwLockReadGuard<'_, InMemoryCrmState>> {
        self.state.read().map_err(|err| {
            CrmRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> CrmRepositoryResult<RwLockWriteGuard<'_, InMemoryCrmState>> {
        self.state.write().map_err(|err| {
            CrmRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCrmRepository {
    async fn store_company(&self, company: &Company) -> CrmRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.companies.insert(company.id(), company.clone()) {
            return Err(CrmRepositoryError::duplicate("company", company.id()));
        }
        Ok(())
    }

    async fn update_company(&self, company: &Company) -> CrmRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.companies.replace(company.id(), company.clone()) {
            return Err(CrmRepositoryError::not_found("company", company.id()));
        }
        Ok(())
    }

    async fn remove_company(&self, id: CompanyId) -> CrmRepositoryResult<Company> {
        let mut state = self.write()?;
        state
            .companies
            .remove(id)
            .ok_or_else(|| CrmRepositoryError::not_found("company", id))
    }

    async fn find_company(&self, id: CompanyId) -> CrmRepositoryResult<Option<Company>> {
        Ok(self.read()?.companies.get(id))
    }

    async fn find_companies_by_name(
        &self,
        name: &CompanyName,
    ) -> CrmRepositoryResult<Vec<Company>> {
        Ok(self.read()?.companies.select(|company| company.name() == name))
    }

    async fn list_companies(&self) -> CrmRepositoryResult<Vec<Company>> {
        Ok(self.read()?.companies.select(|_| true))
    }
}

#[async_trait]
impl ContactRepository for InMemoryCrmRepository {
    async fn store_contact(&self, contact: &Contact) -> CrmRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.contacts.insert(contact.id(), contact.clone()) {
            return Err(CrmRepositoryError::duplicate("contact", contact.id()));
        }
        Ok(())
    }

    async fn update_contact(&self, contact: &Contact) -> CrmRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.contacts.replace(contact.id(), contact.clone()) {
            return Err(CrmRepositoryError::not_found("contact", contact.id()));
        }
        Ok(())
    }

    async fn remove_contact(&self, id: ContactId) -> CrmRepositoryResult<Contact> {
        let mut state = self.write()?;
        state
            .contacts
            .remove(id)
            .ok_or_else(|| CrmRepositoryError::not_found("contact", id))
    }

    async fn find_contact(&self, id: ContactId) -> CrmRepositoryResult<Option<Contact>> {
        Ok(self.read()?.contacts.get(id))
    }

    async fn find_contacts_by_company(
        &self,
        company: &CompanyName,
    ) -> CrmRepositoryResult<Vec<Contact>> {
        Ok(self.read()?.contacts.select(|contact| contact.company() == company))
    }

    async fn list_contacts(&self) -> CrmRepositoryResult<Vec<Contact>> {
        Ok(self.read()?.contacts.select(|_| true))
    }
}

#[async_trait]
impl InteractionRepository for InMemoryCrmRepository {
    async fn store_interaction(&self, interaction: &Interaction) -> CrmRepositoryResult<()> {
        let mut state = self.write()?;
        if !state
            .interactions
            .insert(interaction.id(), interaction.clone())
        {
            return Err(CrmRepositoryError::duplicate(
                "interaction",
                interaction.id(),
            ));
        }
        Ok(())
    }

    async fn update_interaction(&self, interaction: &Interaction) -> CrmRepositoryResult<()> {
        let mut state = self.write()?;
        if !state
            .interactions
            .replace(interaction.id(), interaction.clone())
        {
            return Err(CrmRepositoryError::not_found(
                "interaction",
                interaction.id(),
            ));
        }
        Ok(())
    }

    async fn remove_interaction(&self, id: InteractionId) -> CrmRepositoryResult<Interaction> {
        let mut state = self.write()?;
        state
            .interactions
            .remove(id)
            .ok_or_else(|| CrmRepositoryError::not_found("interaction", id))
    }

    async fn find_interaction(
        &self,
        id: InteractionId,
    ) -> CrmRepositoryResult<Option<Interaction>> {
        Ok(self.read()?.interactions.get(id))
    }

    async fn find_interactions_by_contact(
        &self,
        contact: ContactId,
    ) -> CrmRepositoryResult<Vec<Interaction>> {
        Ok(self
            .read()?
            .interactions
            .select(|interaction| interaction.contact_id() == contact))
    }
}
