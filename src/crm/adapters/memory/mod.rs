//! In-memory session store for CRM records.

mod repository;

pub use repository::InMemoryCrmRepository;
