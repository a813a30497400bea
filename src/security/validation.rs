use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Simplified RFC 5322; requires at least one dot after @ for the TLD
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Input format checks used by the services before any database access
pub struct Validator;

impl Validator {
    /// Validates email address format
    ///
    /// # Example
    /// ```
    /// use user_service::security::Validator;
    ///
    /// assert!(Validator::validate_email("asa@gmail.com"));
    /// assert!(!Validator::validate_email("invalid-email"));
    /// ```
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
            return false;
        }

        if email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }

    pub fn validate_name(name: &str) -> bool {
        !name.is_empty() && name.chars().count() <= MAX_NAME_LENGTH
    }

    /// Validates password length against the configured minimum
    ///
    /// Returns every violated rule so the caller can report them all at once.
    pub fn validate_password(password: &str, min_length: usize) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let length = password.chars().count();

        if length < min_length {
            errors.push(format!(
                "Password must be at least {} characters long",
                min_length
            ));
        }

        if length > MAX_PASSWORD_LENGTH {
            errors.push(format!(
                "Password must not exceed {} characters",
                MAX_PASSWORD_LENGTH
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
