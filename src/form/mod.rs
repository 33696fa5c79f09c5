//! Form orchestration state.
//!
//! A [`FormSession`] owns the draft fields, the per-field error map and an
//! explicit [`FormState`]. Rendering layers send events (`edit`,
//! `validate`, `submit`, `complete`, `fail`, `cancel`) and read the state
//! back; nothing here depends on a particular UI technology.

mod errors;
mod session;

pub use errors::{FieldErrors, FormError};
pub use session::{FormDraft, FormEvent, FormSession, FormState};
