//! Submission record built from a valid entry form

use crate::state::{EntryForm, FieldId};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Payload emitted for each valid submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    /// Cost guess prefixed with `$`
    pub air_fryer_cost: String,
    /// Base64 of the formatted PIN
    pub spidr_pin: String,
}

impl SubmissionRecord {
    pub fn from_form(form: &EntryForm) -> Self {
        let value = |id: FieldId| form.field(id).value().to_string();
        Self {
            first_name: value(FieldId::FirstName),
            last_name: value(FieldId::LastName),
            phone: value(FieldId::Phone),
            email: value(FieldId::Email),
            air_fryer_cost: format!("${}", form.field(FieldId::AirFryerCost).value()),
            spidr_pin: encode_pin(form.field(FieldId::SpidrPin).value()),
        }
    }
}

/// Reversible base64 encoding applied to the PIN before it is logged.
///
/// This is obfuscation only. Anyone holding the record can decode it.
pub fn encode_pin(pin: &str) -> String {
    STANDARD.encode(pin)
}
