use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Checks every field and reports all violations at once, so the caller can
/// reject before touching the store.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if username.is_empty() {
        errors.push(FieldError::new("username", "username is required"));
    } else if username.chars().count() < USERNAME_MIN || username.chars().count() > USERNAME_MAX {
        errors.push(FieldError::new(
            "username",
            format!("username must be {USERNAME_MIN}-{USERNAME_MAX} characters"),
        ));
    }

    if email.is_empty() {
        errors.push(FieldError::new("email", "email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new("email", "email is not valid"));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "password is required"));
    } else if password.chars().count() < PASSWORD_MIN {
        errors.push(FieldError::new(
            "password",
            format!("password must be at least {PASSWORD_MIN} characters"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if email.is_empty() {
        errors.push(FieldError::new("email", "email is required"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "password is required"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_registration() {
        assert!(validate_registration("alice", "a@b.com", "secret1").is_ok());
    }

    #[test]
    fn rejects_missing_fields_with_one_error_each() {
        let errors = validate_registration("", "", "").unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["username", "email", "password"]);
    }

    #[test]
    fn rejects_short_username() {
        let errors = validate_registration("ab", "a@b.com", "secret1").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "username");
    }

    #[test]
    fn rejects_overlong_username() {
        let name = "x".repeat(31);
        let errors = validate_registration(&name, "a@b.com", "secret1").unwrap_err();
        assert_eq!(errors[0].field, "username");
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "@c.com"] {
            let errors = validate_registration("alice", bad, "secret1").unwrap_err();
            assert_eq!(errors[0].field, "email", "expected {bad} to be rejected");
        }
    }

    #[test]
    fn rejects_short_password() {
        let errors = validate_registration("alice", "a@b.com", "five5").unwrap_err();
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn login_needs_both_fields() {
        assert!(validate_login("a@b.com", "secret1").is_ok());
        let errors = validate_login("", "secret1").unwrap_err();
        assert_eq!(errors[0].field, "email");
        let errors = validate_login("a@b.com", "").unwrap_err();
        assert_eq!(errors[0].field, "password");
    }
}
