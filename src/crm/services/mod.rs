//! Application services for CRM record orchestration.

mod records;

pub use records::{CrmService, CrmServiceError, CrmServiceResult};
