//! Input checks applied to request bodies before any business logic runs.

use crate::server::error::AppError;

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 20;
const EMAIL_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 40;

/// Validates an account or profile name, returning it trimmed.
pub fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    let len = name.chars().count();

    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Err(AppError::Validation(format!(
            "Name must be between {} and {} characters",
            NAME_MIN, NAME_MAX
        )));
    }

    Ok(name.to_string())
}

/// Validates an email address, returning it trimmed.
///
/// Only the shape is checked: something before and after a single `@`.
pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim();

    if email.is_empty() || email.chars().count() > EMAIL_MAX {
        return Err(AppError::Validation(format!(
            "Email must be between 1 and {} characters",
            EMAIL_MAX
        )));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email.to_string())
        }
        _ => Err(AppError::Validation("Email is not valid".to_string())),
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();

    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
        return Err(AppError::Validation(format!(
            "Password must be between {} and {} characters",
            PASSWORD_MIN, PASSWORD_MAX
        )));
    }

    Ok(())
}

/// Rejects blank free-text fields such as assignment or document names.
pub fn require_non_blank(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::Validation(format!("{} must not be blank", field)));
    }

    Ok(value.to_string())
}
