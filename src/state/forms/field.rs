//! Form field value objects

use super::format::{digits, format_phone, format_pin};
use super::validation::{validate, FieldError};
use std::fmt;

/// Character shown in place of each PIN character while masked
pub const MASK_CHAR: char = '•';

/// The six inputs of the entry form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Phone,
    Email,
    AirFryerCost,
    SpidrPin,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Phone,
        FieldId::Email,
        FieldId::AirFryerCost,
        FieldId::SpidrPin,
    ];

    /// Position of the field in the form
    pub fn index(self) -> usize {
        match self {
            FieldId::FirstName => 0,
            FieldId::LastName => 1,
            FieldId::Phone => 2,
            FieldId::Email => 3,
            FieldId::AirFryerCost => 4,
            FieldId::SpidrPin => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Key used in submission records
    pub fn key(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Phone => "phone",
            FieldId::Email => "email",
            FieldId::AirFryerCost => "airFryerCost",
            FieldId::SpidrPin => "spidrPin",
        }
    }

    /// Label rendered on the input border
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Phone => "Phone Number",
            FieldId::Email => "Email Address",
            FieldId::AirFryerCost => "Guess the Air Fryer's Cost",
            FieldId::SpidrPin => "Spidr PIN",
        }
    }

    /// Subject used in the "... is required" message
    pub fn required_label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Phone => "Phone number",
            FieldId::Email => "Email address",
            FieldId::AirFryerCost => "Air Fryer cost",
            FieldId::SpidrPin => "Spidr PIN",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::FirstName => "Enter your first name",
            FieldId::LastName => "Enter your last name",
            FieldId::Phone => "e.g. (123) 456-7890",
            FieldId::Email => "Enter your email address",
            FieldId::AirFryerCost => "0.00",
            FieldId::SpidrPin => "####-####-####-####",
        }
    }

    /// Whether the stored value is a display mask over a digit sequence
    pub fn is_masked_digits(self) -> bool {
        matches!(self, FieldId::Phone | FieldId::SpidrPin)
    }

    /// Apply the field's display formatter, if it has one
    pub fn format(self, raw: &str) -> String {
        match self {
            FieldId::Phone => format_phone(raw),
            FieldId::SpidrPin => format_pin(raw),
            _ => raw.to_string(),
        }
    }

    /// Whether a typed character is accepted into this field
    pub fn accepts(self, c: char) -> bool {
        match self {
            FieldId::AirFryerCost => c.is_ascii_digit() || c == '.',
            _ => !c.is_control(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation outcome of a field's current value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not edited since the form was created or reset
    #[default]
    Pristine,
    Valid,
    Invalid(FieldError),
}

/// A single form field: its current display value and validation status
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    value: String,
    status: FieldStatus,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            status: FieldStatus::Pristine,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> &FieldStatus {
        &self.status
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }

    pub fn error(&self) -> Option<&FieldError> {
        match &self.status {
            FieldStatus::Invalid(err) => Some(err),
            _ => None,
        }
    }

    /// Error text shown under the input (empty when there is none)
    pub fn error_message(&self) -> String {
        self.error().map(ToString::to_string).unwrap_or_default()
    }

    /// Replace the value: format it, then validate the formatted result
    pub fn set_value(&mut self, raw: &str) {
        self.value = self.id.format(raw);
        self.status = match validate(self.id, &self.value) {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        };
    }

    /// Append a typed character. Returns false if the field rejects it.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.id.accepts(c) {
            return false;
        }
        let mut raw = self.value.clone();
        raw.push(c);
        self.set_value(&raw);
        true
    }

    /// Remove the last character, or the last digit for masked fields
    pub fn pop_char(&mut self) {
        let mut raw = if self.id.is_masked_digits() {
            digits(&self.value)
        } else {
            self.value.clone()
        };
        raw.pop();
        self.set_value(&raw);
    }

    /// Empty the field as the user would, which re-validates it
    pub fn clear(&mut self) {
        self.set_value("");
    }

    /// Return to the pristine, empty state
    pub fn reset(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Pristine;
    }

    /// Get the display value for rendering
    pub fn display_value(&self, masked: bool) -> String {
        if masked {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }
}
