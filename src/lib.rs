//! crmboard: data core of a CRM and project board dashboard.
//!
//! This crate provides the input normalizers and validators shared by every
//! form, the CRM entity model (companies, contacts and interactions) and the
//! task board ordering engine.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Session-scoped in-memory implementations of ports
//! - **Services**: Orchestration over domain and ports
//!
//! # Modules
//!
//! - [`normalize`]: Phone, email and Brazilian Real normalizers
//! - [`form`]: Form state machine and field errors
//! - [`crm`]: Company, contact and interaction records
//! - [`board`]: Columns of ordered tasks
//! - [`access`]: Role gate shared with rendering layers

pub mod access;
pub mod board;
pub mod crm;
pub mod form;
pub mod normalize;
