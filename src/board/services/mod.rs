//! Service layer for the board bounded context.

mod session;

pub use session::BoardSession;
