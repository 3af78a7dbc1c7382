//! Field validators
//!
//! Every validator is total: any input string yields either `Ok(())` or a
//! `FieldError` whose `Display` text is the message shown under the input.

use super::field::FieldId;
use super::format::{digits, PHONE_DIGITS, PIN_DIGITS};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Smallest accepted cost guess, in dollars
pub const MIN_COST: f64 = 0.01;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z.\s]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Only letters and spaces are allowed")]
    InvalidName,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Air Fryer cost must be at least $0.01")]
    CostTooLow,
    #[error("PIN must be 16 digits in format ####-####-####-####")]
    InvalidPin,
}

/// Validate `value` with the rules for `field`
pub fn validate(field: FieldId, value: &str) -> Result<(), FieldError> {
    match field {
        FieldId::FirstName | FieldId::LastName => validate_name(value, field.required_label()),
        FieldId::Phone => validate_phone(value),
        FieldId::Email => validate_email(value),
        FieldId::AirFryerCost => validate_cost(value),
        FieldId::SpidrPin => validate_pin(value),
    }
}

pub fn validate_name(name: &str, label: &'static str) -> Result<(), FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(label));
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(FieldError::InvalidName);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if phone.trim().is_empty() {
        return Err(FieldError::Required(FieldId::Phone.required_label()));
    }
    if digits(phone).len() != PHONE_DIGITS {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

/// The pattern is tested against the untrimmed value, so surrounding
/// whitespace makes an address invalid.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::Required(FieldId::Email.required_label()));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_cost(cost: &str) -> Result<(), FieldError> {
    let trimmed = cost.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(FieldId::AirFryerCost.required_label()));
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= MIN_COST => Ok(()),
        _ => Err(FieldError::CostTooLow),
    }
}

pub fn validate_pin(pin: &str) -> Result<(), FieldError> {
    if pin.trim().is_empty() {
        return Err(FieldError::Required(FieldId::SpidrPin.required_label()));
    }
    if digits(pin).len() != PIN_DIGITS {
        return Err(FieldError::InvalidPin);
    }
    Ok(())
}
