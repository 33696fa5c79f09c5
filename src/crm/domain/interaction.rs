//! Interactions logged against a contact.

use super::{ContactId, InteractionId, ParseVariantError};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Phone call.
    Call,
    /// Email exchange.
    Email,
    /// In-person or video meeting.
    Meeting,
    /// Internal note.
    Note,
}

impl InteractionType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Meeting => "meeting",
            Self::Note => "note",
        }
    }
}

impl TryFrom<&str> for InteractionType {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "meeting" => Ok(Self::Meeting),
            "note" => Ok(Self::Note),
            _ => Err(ParseVariantError::new("interaction type", value)),
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionOutcome {
    /// Moved the relationship forward.
    Positive,
    /// No noticeable effect.
    #[default]
    Neutral,
    /// Set the relationship back.
    Negative,
}

impl InteractionOutcome {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl TryFrom<&str> for InteractionOutcome {
    type Error = ParseVariantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err(ParseVariantError::new("interaction outcome", value)),
        }
    }
}

impl fmt::Display for InteractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for logging an interaction.
///
/// The denormalized contact name is filled in from the stored contact when
/// the interaction is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInteraction {
    /// Contact the interaction belongs to.
    pub contact_id: ContactId,
    /// Channel.
    pub kind: InteractionType,
    /// Short subject line.
    pub subject: String,
    /// Longer description.
    pub description: String,
    /// When the interaction happened.
    pub date: DateTime<Utc>,
    /// Duration in minutes, if tracked.
    pub duration_minutes: Option<u32>,
    /// Result of the interaction.
    pub outcome: InteractionOutcome,
    /// Planned follow-up date, if any.
    pub follow_up: Option<NaiveDate>,
}

/// Partial update for an interaction; `None` fields are left untouched.
///
/// The owning contact cannot be changed: interactions are never moved
/// between contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionPatch {
    /// New channel.
    pub kind: Option<InteractionType>,
    /// New subject.
    pub subject: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New date.
    pub date: Option<DateTime<Utc>>,
    /// New duration in minutes.
    pub duration_minutes: Option<u32>,
    /// New outcome.
    pub outcome: Option<InteractionOutcome>,
    /// New follow-up date.
    pub follow_up: Option<NaiveDate>,
}

/// Interaction record owned by exactly one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    id: InteractionId,
    contact_id: ContactId,
    contact_name: String,
    kind: InteractionType,
    subject: String,
    description: String,
    date: DateTime<Utc>,
    duration_minutes: Option<u32>,
    outcome: InteractionOutcome,
    follow_up: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl Interaction {
    /// Creates an interaction with a fresh identifier and creation timestamp.
    #[must_use]
    pub fn new(data: NewInteraction, contact_name: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: InteractionId::new(),
            contact_id: data.contact_id,
            contact_name: contact_name.into(),
            kind: data.kind,
            subject: data.subject.trim().to_owned(),
            description: data.description.trim().to_owned(),
            date: data.date,
            duration_minutes: data.duration_minutes,
            outcome: data.outcome,
            follow_up: data.follow_up,
            created_at: clock.utc(),
        }
    }

    /// Returns the interaction identifier.
    #[must_use]
    pub const fn id(&self) -> InteractionId {
        self.id
    }

    /// Returns the owning contact.
    #[must_use]
    pub const fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    /// Returns the contact name captured at creation time.
    #[must_use]
    pub fn contact_name(&self) -> &str {
        &self.contact_name
    }

    /// Returns the channel.
    #[must_use]
    pub const fn kind(&self) -> InteractionType {
        self.kind
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the interaction happened.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the duration in minutes, if tracked.
    #[must_use]
    pub const fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> InteractionOutcome {
        self.outcome
    }

    /// Returns the follow-up date, if any.
    #[must_use]
    pub const fn follow_up(&self) -> Option<NaiveDate> {
        self.follow_up
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Refreshes the denormalized contact name after a contact rename.
    pub fn rename_contact(&mut self, contact_name: impl Into<String>) {
        self.contact_name = contact_name.into();
    }

    /// Merges a partial update. Identifier, owner and creation time never
    /// change.
    pub fn apply(&mut self, patch: InteractionPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(subject) = patch.subject {
            self.subject = subject.trim().to_owned();
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_owned();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(minutes) = patch.duration_minutes {
            self.duration_minutes = Some(minutes);
        }
        if let Some(outcome) = patch.outcome {
            self.outcome = outcome;
        }
        if let Some(follow_up) = patch.follow_up {
            self.follow_up = Some(follow_up);
        }
    }
}
