//! Display masks for the phone and PIN fields
//!
//! Both formatters are pure: they keep only ASCII digits from the raw
//! input, truncate to the field's digit capacity and render the mask.

/// Digits in a complete phone number
pub const PHONE_DIGITS: usize = 10;

/// Digits in a complete Spidr PIN
pub const PIN_DIGITS: usize = 16;

/// Digits per hyphen-separated PIN group
const PIN_GROUP: usize = 4;

/// Keep only the ASCII digits of `value`, in order
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Format a phone number progressively as digits accumulate.
///
/// - 1-3 digits: `555`
/// - 4-6 digits: `(555) 123`
/// - 7-10 digits: `(555) 123-4567`
///
/// Anything past the tenth digit is dropped.
pub fn format_phone(value: &str) -> String {
    let mut cleaned = digits(value);
    cleaned.truncate(PHONE_DIGITS);

    match cleaned.len() {
        0..=3 => cleaned,
        4..=6 => format!("({}) {}", &cleaned[..3], &cleaned[3..]),
        _ => format!(
            "({}) {}-{}",
            &cleaned[..3],
            &cleaned[3..6],
            &cleaned[6..]
        ),
    }
}

/// Format a PIN as up to four hyphen-joined groups of four digits.
///
/// Empty trailing groups are omitted, so five digits render as `1234-5`.
pub fn format_pin(value: &str) -> String {
    let cleaned: Vec<char> = value
        .chars()
        .filter(char::is_ascii_digit)
        .take(PIN_DIGITS)
        .collect();

    cleaned
        .chunks(PIN_GROUP)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}
