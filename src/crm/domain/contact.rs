//! Contact aggregate.

use super::{CompanyName, ContactId, ParseVariantError, TagSet, company::non_blank};
use crate::normalize::{EmailAddress, PhoneNumber};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship stage of a contact.
///
/// Any status may follow any other; the model does not impose a lifecycle
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// Unqualified lead.
    #[default]
    Lead,
    /// Qualified, not yet buying.
    Prospect,
    /// Paying customer.
    Customer,
    /// No longer engaged.
    Inactive,
}

impl ContactStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Prospect => "prospect",
            Self::Customer => "customer",
            Self::Inactive => "inactive",
        }
    }
}

impl TryFrom<&str> for ContactStatus {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lead" => Ok(Self::Lead),
            "prospect" => Ok(Self::Prospect),
            "customer" => Ok(Self::Customer),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ParseVariantError::new("contact status", value)),
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for creating a contact from normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Contact name.
    pub name: String,
    /// Canonical email address, if any.
    pub email: Option<EmailAddress>,
    /// Canonical phone digits, if any.
    pub phone: Option<PhoneNumber>,
    /// Name of the company the contact works for.
    pub company: CompanyName,
    /// Job title.
    pub position: String,
    /// Relationship stage.
    pub status: ContactStatus,
    /// Date of the last touchpoint, if any.
    pub last_contact: Option<NaiveDate>,
    /// Initial tags.
    pub tags: TagSet,
    /// Lead source, if known.
    pub source: Option<String>,
    /// Free-text notes.
    pub notes: String,
}

impl NewContact {
    /// Creates a request with the required fields; status is
    /// [`ContactStatus::Lead`] and optional fields are empty.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        company: CompanyName,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            company,
            position: position.into(),
            status: ContactStatus::default(),
            last_contact: None,
            tags: TagSet::new(),
            source: None,
            notes: String::new(),
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: ContactStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial tags.
    #[must_use]
    pub fn with_tags<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Partial update for a contact; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    /// New name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<EmailAddress>,
    /// New phone number.
    pub phone: Option<PhoneNumber>,
    /// New company reference.
    pub company: Option<CompanyName>,
    /// New job title.
    pub position: Option<String>,
    /// New status; any transition is allowed.
    pub status: Option<ContactStatus>,
    /// New last-contact date.
    pub last_contact: Option<NaiveDate>,
    /// Replacement tag set.
    pub tags: Option<TagSet>,
    /// New source; blank clears it.
    pub source: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}

/// Contact aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    email: Option<EmailAddress>,
    phone: Option<PhoneNumber>,
    company: CompanyName,
    position: String,
    status: ContactStatus,
    last_contact: Option<NaiveDate>,
    tags: TagSet,
    source: Option<String>,
    notes: String,
    created_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a contact with a fresh identifier and creation timestamp.
    #[must_use]
    pub fn new(data: NewContact, clock: &impl Clock) -> Self {
        Self {
            id: ContactId::new(),
            name: data.name.trim().to_owned(),
            email: data.email,
            phone: data.phone,
            company: data.company,
            position: data.position.trim().to_owned(),
            status: data.status,
            last_contact: data.last_contact,
            tags: data.tags,
            source: non_blank(data.source),
            notes: data.notes,
            created_at: clock.utc(),
        }
    }

    /// Returns the contact identifier.
    #[must_use]
    pub const fn id(&self) -> ContactId {
        self.id
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical email address, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the canonical phone digits, if any.
    #[must_use]
    pub const fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// Returns the weak company reference.
    #[must_use]
    pub const fn company(&self) -> &CompanyName {
        &self.company
    }

    /// Returns the job title.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the relationship stage.
    #[must_use]
    pub const fn status(&self) -> ContactStatus {
        self.status
    }

    /// Returns the last-contact date, if any.
    #[must_use]
    pub const fn last_contact(&self) -> Option<NaiveDate> {
        self.last_contact
    }

    /// Returns the tag set.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the lead source, if known.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the relationship stage. Every transition is permitted.
    pub const fn set_status(&mut self, status: ContactStatus) {
        self.status = status;
    }

    /// Adds a tag; see [`TagSet::add`].
    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.tags.add(tag)
    }

    /// Removes a tag; see [`TagSet::remove`].
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Merges a partial update. Identifier and creation time never change.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_owned();
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(position) = patch.position {
            self.position = position.trim().to_owned();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.last_contact {
            self.last_contact = Some(date);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if patch.source.is_some() {
            self.source = non_blank(patch.source);
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}
