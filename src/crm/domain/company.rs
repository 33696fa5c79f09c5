//! Company aggregate and its classification enums.

use super::{CompanyId, CompanyName, ContactId, ParseVariantError};
use crate::normalize::{EmailAddress, PhoneNumber};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Commercial status of a company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    /// Current customer.
    #[default]
    Active,
    /// Former or dormant customer.
    Inactive,
    /// Potential customer.
    Prospect,
}

impl CompanyStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Prospect => "prospect",
        }
    }
}

impl TryFrom<&str> for CompanyStatus {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "prospect" => Ok(Self::Prospect),
            _ => Err(ParseVariantError::new("company status", value)),
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headcount bucket of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    /// Up to 9 employees.
    Micro,
    /// 10 to 49 employees.
    Small,
    /// 50 to 249 employees.
    Medium,
    /// 250 to 999 employees.
    Large,
    /// 1000 employees or more.
    Enterprise,
}

impl CompanySize {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }
}

impl TryFrom<&str> for CompanySize {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "micro" => Ok(Self::Micro),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(ParseVariantError::new("company size", value)),
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for creating a company from normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    /// Company name.
    pub name: CompanyName,
    /// Canonical email address, if any.
    pub email: Option<EmailAddress>,
    /// Canonical phone digits, if any.
    pub phone: Option<PhoneNumber>,
    /// Website URL, if any.
    pub website: Option<String>,
    /// Postal address, if any.
    pub address: Option<String>,
    /// Industry label.
    pub industry: String,
    /// Headcount bucket, if known.
    pub size: Option<CompanySize>,
    /// Commercial status.
    pub status: CompanyStatus,
}

impl NewCompany {
    /// Creates a request with the name and industry; other fields are empty
    /// and the status is [`CompanyStatus::Active`].
    #[must_use]
    pub fn new(name: CompanyName, industry: impl Into<String>) -> Self {
        Self {
            name,
            email: None,
            phone: None,
            website: None,
            address: None,
            industry: industry.into(),
            size: None,
            status: CompanyStatus::default(),
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
    pub const fn with_status(mut self, status: CompanyStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the headcount bucket.
    #[must_use]
    pub const fn with_size(mut self, size: CompanySize) -> Self {
        self.size = Some(size);
        self
    }
}

/// Partial update for a company; `None` fields are left untouched.
///
/// Blank strings in optional text fields clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    /// New name.
    pub name: Option<CompanyName>,
    /// New email address.
    pub email: Option<EmailAddress>,
    /// New phone number.
    pub phone: Option<PhoneNumber>,
    /// New website; blank clears it.
    pub website: Option<String>,
    /// New address; blank clears it.
    pub address: Option<String>,
    /// New industry.
    pub industry: Option<String>,
    /// New headcount bucket.
    pub size: Option<CompanySize>,
    /// New status.
    pub status: Option<CompanyStatus>,
}

/// Company aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: CompanyName,
    email: Option<EmailAddress>,
    phone: Option<PhoneNumber>,
    website: Option<String>,
    address: Option<String>,
    industry: String,
    size: Option<CompanySize>,
    status: CompanyStatus,
    contacts: Vec<ContactId>,
    created_at: DateTime<Utc>,
}

impl Company {
    /// Creates a company with a fresh identifier and creation timestamp.
    #[must_use]
    pub fn new(data: NewCompany, clock: &impl Clock) -> Self {
        Self {
            id: CompanyId::new(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            website: non_blank(data.website),
            address: non_blank(data.address),
            industry: data.industry.trim().to_owned(),
            size: data.size,
            status: data.status,
            contacts: Vec::new(),
            created_at: clock.utc(),
        }
    }

    /// Returns the company identifier.
    #[must_use]
    pub const fn id(&self) -> CompanyId {
        self.id
    }

    /// Returns the company name.
    #[must_use]
    pub const fn name(&self) -> &CompanyName {
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

    /// Returns the website, if any.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Returns the postal address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the industry label.
    #[must_use]
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// Returns the headcount bucket, if known.
    #[must_use]
    pub const fn size(&self) -> Option<CompanySize> {
        self.size
    }

    /// Returns the commercial status.
    #[must_use]
    pub const fn status(&self) -> CompanyStatus {
        self.status
    }

    /// Returns the contacts grouped under this company, in attach order.
    #[must_use]
    pub fn contacts(&self) -> &[ContactId] {
        &self.contacts
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merges a partial update. Identifier and creation time never change.
    pub fn apply(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if patch.website.is_some() {
            self.website = non_blank(patch.website);
        }
        if patch.address.is_some() {
            self.address = non_blank(patch.address);
        }
        if let Some(industry) = patch.industry {
            self.industry = industry.trim().to_owned();
        }
        if let Some(size) = patch.size {
            self.size = Some(size);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// Groups a contact under this company, returning `false` if it was
    /// already attached.
    pub fn attach_contact(&mut self, contact: ContactId) -> bool {
        if self.contacts.contains(&contact) {
            return false;
        }
        self.contacts.push(contact);
        true
    }

    /// Removes a contact from the grouping, returning `true` when it was
    /// attached. Remaining contacts keep their order.
    pub fn detach_contact(&mut self, contact: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|id| *id != contact);
        self.contacts.len() != before
    }
}

/// Trims an optional string and maps blank values to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
