//! Input validation utilities.
//!
//! Guards applied to intake-form fields before records are created. Each
//! function rejects bad input with a `ClinicError::InvalidInput` carrying a
//! reason suitable for showing to front-desk staff.

use crate::{ClinicError, ClinicResult};

const MAX_NAME_LEN: usize = 100;
const MIN_CONTACT_DIGITS: usize = 7;
const MAX_CONTACT_DIGITS: usize = 15;
const MAX_AGE: u32 = 130;

/// Validates a person's name as entered at intake.
///
/// Names are restricted to letters and spaces. The same rule the intake
/// form applies on keystroke, enforced again here so the service layer does
/// not depend on the caller's form behaving.
pub fn validate_person_name(name: &str) -> ClinicResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ClinicError::InvalidInput("name cannot be empty".into()));
    }

    if trimmed.len() > MAX_NAME_LEN {
        return Err(ClinicError::InvalidInput(format!(
            "name exceeds maximum length of {} characters",
            MAX_NAME_LEN
        )));
    }

    let ok = trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
    if !ok {
        return Err(ClinicError::InvalidInput(
            "name can only contain letters and spaces".into(),
        ));
    }

    Ok(())
}

/// Validates a contact number: digits only, with bounded length.
pub fn validate_contact_number(contact: &str) -> ClinicResult<()> {
    let trimmed = contact.trim();

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClinicError::InvalidInput(
            "contact number can only contain digits".into(),
        ));
    }

    if trimmed.len() < MIN_CONTACT_DIGITS || trimmed.len() > MAX_CONTACT_DIGITS {
        return Err(ClinicError::InvalidInput(format!(
            "contact number must be between {} and {} digits",
            MIN_CONTACT_DIGITS, MAX_CONTACT_DIGITS
        )));
    }

    Ok(())
}

/// Validates a patient age.
pub fn validate_age(age: u32) -> ClinicResult<()> {
    if age == 0 || age > MAX_AGE {
        return Err(ClinicError::InvalidInput(format!(
            "age must be between 1 and {}",
            MAX_AGE
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_person_name("Maria Santos").is_ok());
        assert!(validate_person_name("  Juan Dela Cruz ").is_ok());
    }

    #[test]
    fn rejects_names_with_digits_or_punctuation() {
        let err = validate_person_name("Maria2").expect_err("should reject digits");
        assert!(matches!(err, ClinicError::InvalidInput(msg) if msg.contains("letters")));

        assert!(validate_person_name("O'Brien").is_err());
        assert!(validate_person_name("").is_err());
    }

    #[test]
    fn rejects_overlong_name() {
        let err = validate_person_name(&"a".repeat(101)).expect_err("should reject long name");
        assert!(
            matches!(err, ClinicError::InvalidInput(msg) if msg.contains("exceeds maximum length"))
        );
    }

    #[test]
    fn contact_numbers_are_digit_only_and_bounded() {
        assert!(validate_contact_number("09123456789").is_ok());
        assert!(validate_contact_number("0912-345").is_err());
        assert!(validate_contact_number("123").is_err());
        assert!(validate_contact_number("1234567890123456").is_err());
    }

    #[test]
    fn age_bounds() {
        assert!(validate_age(45).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(131).is_err());
    }
}
