//! Shared test helpers for in-memory integration tests.

use crmboard::board::services::BoardSession;
use crmboard::crm::{adapters::memory::InMemoryCrmRepository, services::CrmService};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// CRM service backed by the in-memory session store.
pub type TestCrmService = CrmService<InMemoryCrmRepository, DefaultClock>;

/// Provides a CRM service over a fresh session store.
#[fixture]
pub fn crm() -> TestCrmService {
    CrmService::new(
        Arc::new(InMemoryCrmRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a board session seeded with the default columns.
#[fixture]
pub fn board() -> BoardSession<DefaultClock> {
    BoardSession::with_default_columns(Arc::new(DefaultClock))
        .expect("default columns are valid")
}

/// Routes `tracing` output to the test harness so rejected operations show
/// up with `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _already_set = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
