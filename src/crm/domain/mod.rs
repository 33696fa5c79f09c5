//! Domain model for the CRM entity graph.
//!
//! Companies group contacts, contacts own their interactions. Email and
//! phone fields hold the canonical newtypes from [`crate::normalize`], so a
//! stored entity can never carry a raw, unnormalized value.

mod company;
mod contact;
mod error;
mod ids;
mod interaction;
mod tags;

pub use company::{Company, CompanyPatch, CompanySize, CompanyStatus, NewCompany};
pub use contact::{Contact, ContactPatch, ContactStatus, NewContact};
pub use error::{CrmDomainError, ParseVariantError};
pub use ids::{CompanyId, CompanyName, ContactId, InteractionId};
pub use interaction::{
    Interaction, InteractionOutcome, InteractionPatch, InteractionType, NewInteraction,
};
pub use tags::TagSet;
