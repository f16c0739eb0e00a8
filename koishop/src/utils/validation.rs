//! Validation utilities for user input.
//!
//! Forms validate locally before any network call is made; a failed check
//! here never reaches the API layer.

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate phone number: digits only (an optional leading +), 9-11 digits
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if digits.len() < 9 || digits.len() > 11 {
        return ValidationResult::err("Phone number must be 9 to 11 digits");
    }

    ValidationResult::ok()
}

/// Validate password and its confirmation together
pub fn validate_password_pair(password: &str, confirmation: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    if password != confirmation {
        return ValidationResult::err("Passwords don't match");
    }

    ValidationResult::ok()
}

/// Validate a comment star rating (1 through 5)
pub fn validate_rating(rating: u8) -> ValidationResult {
    if !(1..=5).contains(&rating) {
        return ValidationResult::err("Rating must be between 1 and 5");
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("0912345678").is_valid);
        assert!(validate_phone("+84912345678").is_valid);
        assert!(!validate_phone("").is_valid);
        assert!(!validate_phone("12345").is_valid); // too short
        assert!(!validate_phone("09-1234-5678").is_valid);
        assert!(!validate_phone("abcdefghij").is_valid);
    }

    #[test]
    fn test_password_pair_validation() {
        assert!(validate_password_pair("SecurePass123", "SecurePass123").is_valid);
        assert!(!validate_password_pair("short", "short").is_valid);
        assert!(!validate_password_pair("SecurePass123", "Different123").is_valid);
        assert!(!validate_password_pair("", "").is_valid);
    }

    #[test]
    fn test_rating_validation() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_valid);
        }
        assert!(!validate_rating(0).is_valid);
        assert!(!validate_rating(6).is_valid);
    }
}
