//! Form rendering module
//!
//! - `field_renderer`: input box and inline message for one field
//! - `entry_form`: the giveaway entry form

mod entry_form;
mod field_renderer;

pub use entry_form::draw as draw_entry_form;
