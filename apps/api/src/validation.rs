//! Request field validation shared by the marketplace handlers.
//! Every check runs before any database access.

use uuid::Uuid;

use crate::errors::AppError;

/// Parses an identifier from a path or body, mapping failure to `message`.
pub fn parse_uuid(raw: &str, message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation(message.to_string()))
}

pub fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn require_min_chars(value: &str, field: &str, min: usize) -> Result<(), AppError> {
    if value.trim().chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
pub fn require_email(value: &str, field: &str) -> Result<(), AppError> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split('.')
                    .filter(|part| !part.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(format!("{field} must be a valid email")));
    }
    Ok(())
}

/// `None` for blank input, otherwise the trimmed text.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
