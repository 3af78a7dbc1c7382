//! Application state module

mod app_state;
pub mod forms;
mod toast_state;

pub use app_state::*;
pub use forms::{EntryForm, FieldId, FieldStatus, Form, FormField};
pub use toast_state::*;
