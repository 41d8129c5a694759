//! Waitlist form validation.
//!
//! Shared by the signup modal and the post-OAuth completion form. The
//! provider owns credentials; the backend only validates the profile
//! fields it will persist.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length for a name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum allowed length for a city.
pub const MAX_CITY_LENGTH: usize = 100;

/// Maximum allowed length for a phone number.
pub const MAX_PHONE_LENGTH: usize = 30;

/// Minimum password length enforced before delegating to the provider.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a signup name: required, trimmed-non-empty, within
/// [`MAX_NAME_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name must not exceed {MAX_NAME_LENGTH} characters, got {}",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a city: required, trimmed-non-empty, within [`MAX_CITY_LENGTH`].
pub fn validate_city(city: &str) -> Result<(), CoreError> {
    if city.trim().is_empty() {
        return Err(CoreError::Validation("City must not be empty".to_string()));
    }
    if city.len() > MAX_CITY_LENGTH {
        return Err(CoreError::Validation(format!(
            "City must not exceed {MAX_CITY_LENGTH} characters, got {}",
            city.len()
        )));
    }
    Ok(())
}

/// Validate an email address syntactically.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate a phone number: optional, but bounded when present.
///
/// No format check -- the original form accepts free-form numbers like
/// `(555) 123-4567`.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    if phone.len() > MAX_PHONE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Phone must not exceed {MAX_PHONE_LENGTH} characters, got {}",
            phone.len()
        )));
    }
    Ok(())
}

/// Validate a password meets the minimum length before it is forwarded to
/// the auth provider. The provider applies its own policy on top.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
