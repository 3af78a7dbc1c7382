//! Form domain layer
//!
//! Typed fields, display formatters and validators for the entry form.
//! Every keystroke goes formatter → validator → field status.

mod field;
mod form_state;
pub mod format;
pub mod validation;

pub use field::{FieldId, FieldStatus, FormField};
pub use form_state::{EntryForm, Form};
