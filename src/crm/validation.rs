//! Submission rules for the CRM forms.
//!
//! Each form draft holds raw field text as typed by the user. Validation
//! checks every field, reports all failures at once as [`FieldErrors`] and,
//! only when nothing failed, normalizes the draft into the parameter object
//! the entity model accepts. Submission is all-or-nothing.

use crate::crm::domain::{
    CompanyName, CompanySize, CompanyStatus, ContactId, ContactStatus, InteractionOutcome,
    InteractionType, NewCompany, NewContact, NewInteraction, TagSet,
};
use crate::form::{FieldErrors, FormDraft};
use crate::normalize::{EmailAddress, PhoneNumber, email, phone};
use chrono::{DateTime, NaiveDate, Utc};

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Invalid email";
const PHONE_REQUIRED: &str = "Phone is required";
const INDUSTRY_REQUIRED: &str = "Industry is required";
const COMPANY_REQUIRED: &str = "Company is required";
const POSITION_REQUIRED: &str = "Position is required";
const CONTACT_REQUIRED: &str = "Select a contact";
const SUBJECT_REQUIRED: &str = "Subject is required";
const DESCRIPTION_REQUIRED: &str = "Description is required";
const DATE_REQUIRED: &str = "Date is required";

/// Records an error when the value is blank.
fn require_text(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    errors.check(value.trim().is_empty(), field, message);
}

/// Requires a valid address and returns its canonical form.
fn require_email(errors: &mut FieldErrors, value: &str) -> EmailAddress {
    let address = EmailAddress::from_input(value);
    if address.as_str().is_empty() {
        errors.insert("email", EMAIL_REQUIRED);
    } else if !email::is_valid(address.as_str()) {
        errors.insert("email", EMAIL_INVALID);
    }
    address
}

/// Requires at least one phone digit and returns the canonical digits.
///
/// Digit count is not checked here; callers that need a dialable number use
/// [`phone::is_valid`].
fn require_phone(errors: &mut FieldErrors, value: &str) -> PhoneNumber {
    let number = PhoneNumber::from_input(value);
    errors.check(number.is_empty(), "phone", PHONE_REQUIRED);
    number
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Draft of the company form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyForm {
    /// Company name.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Phone as typed or masked.
    pub phone: String,
    /// Website.
    pub website: String,
    /// Postal address.
    pub address: String,
    /// Industry label.
    pub industry: String,
    /// Headcount bucket.
    pub size: Option<CompanySize>,
    /// Commercial status.
    pub status: CompanyStatus,
}

impl CompanyForm {
    /// Returns the phone field as a display mask.
    #[must_use]
    pub fn phone_display(&self) -> String {
        phone::mask(&self.phone)
    }
}

impl FormDraft for CompanyForm {
    type Output = NewCompany;

    fn validate(&self) -> Result<NewCompany, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = CompanyName::new(self.name.as_str()).ok();
        errors.check(name.is_none(), "name", NAME_REQUIRED);
        let address = require_email(&mut errors, &self.email);
        let number = require_phone(&mut errors, &self.phone);
        require_text(&mut errors, "industry", &self.industry, INDUSTRY_REQUIRED);

        let Some(company_name) = name.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };
        Ok(NewCompany {
            name: company_name,
            email: Some(address),
            phone: Some(number),
            website: optional_text(&self.website),
            address: optional_text(&self.address),
            industry: self.industry.trim().to_owned(),
            size: self.size,
            status: self.status,
        })
    }
}

/// Draft of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Contact name.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Phone as typed or masked.
    pub phone: String,
    /// Company name the contact works for.
    pub company: String,
    /// Job title.
    pub position: String,
    /// Relationship stage.
    pub status: ContactStatus,
    /// Date of the last touchpoint.
    pub last_contact: Option<NaiveDate>,
    /// Tags in entry order.
    pub tags: Vec<String>,
    /// Lead source.
    pub source: String,
    /// Free-text notes.
    pub notes: String,
}

impl FormDraft for ContactForm {
    type Output = NewContact;

    fn validate(&self) -> Result<NewContact, FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", &self.name, NAME_REQUIRED);
        let address = require_email(&mut errors, &self.email);
        let number = require_phone(&mut errors, &self.phone);
        let company = CompanyName::new(self.company.as_str()).ok();
        errors.check(company.is_none(), "company", COMPANY_REQUIRED);
        require_text(&mut errors, "position", &self.position, POSITION_REQUIRED);

        let Some(company_name) = company.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };
        Ok(NewContact {
            name: self.name.trim().to_owned(),
            email: Some(address),
            phone: Some(number),
            company: company_name,
            position: self.position.trim().to_owned(),
            status: self.status,
            last_contact: self.last_contact,
            tags: self.tags.iter().collect::<TagSet>(),
            source: optional_text(&self.source),
            notes: self.notes.clone(),
        })
    }
}

/// Draft of the interaction form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionForm {
    /// Selected contact.
    pub contact_id: Option<ContactId>,
    /// Channel.
    pub kind: InteractionType,
    /// Subject line.
    pub subject: String,
    /// Description.
    pub description: String,
    /// When the interaction happened.
    pub date: Option<DateTime<Utc>>,
    /// Duration in minutes.
    pub duration_minutes: Option<u32>,
    /// Outcome.
    pub outcome: InteractionOutcome,
    /// Planned follow-up date.
    pub follow_up: Option<NaiveDate>,
}

impl Default for InteractionForm {
    fn default() -> Self {
        Self {
            contact_id: None,
            kind: InteractionType::Call,
            subject: String::new(),
            description: String::new(),
            date: None,
            duration_minutes: None,
            outcome: InteractionOutcome::default(),
            follow_up: None,
        }
    }
}

impl FormDraft for InteractionForm {
    type Output = NewInteraction;

    fn validate(&self) -> Result<NewInteraction, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(self.contact_id.is_none(), "contact_id", CONTACT_REQUIRED);
        require_text(&mut errors, "subject", &self.subject, SUBJECT_REQUIRED);
        require_text(
            &mut errors,
            "description",
            &self.description,
            DESCRIPTION_REQUIRED,
        );
        errors.check(self.date.is_none(), "date", DATE_REQUIRED);

        let (Some(contact_id), Some(date), true) = (self.contact_id, self.date, errors.is_empty())
        else {
            return Err(errors);
        };
        Ok(NewInteraction {
            contact_id,
            kind: self.kind,
            subject: self.subject.trim().to_owned(),
            description: self.description.trim().to_owned(),
            date,
            duration_minutes: self.duration_minutes,
            outcome: self.outcome,
            follow_up: self.follow_up,
        })
    }
}
