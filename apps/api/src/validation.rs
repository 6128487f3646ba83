//! Request payload validation with the fixed Portuguese messages the web
//! client displays verbatim.

use crate::errors::AppError;
use crate::models::resume::Resume;

const MIN_PASSWORD_LEN: usize = 6;

/// Checks the shape `local@domain.tld`: exactly one `@`, non-empty local
/// part, a dot-separated domain, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_register(name: &str, email: &str, password: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Nome é obrigatório".to_string()));
    }
    validate_login(email, password)
}

pub fn validate_login(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || !is_valid_email(email.trim()) {
        return Err(AppError::Validation(
            "Email válido é obrigatório".to_string(),
        ));
    }
    if password.trim().is_empty() || password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Senha deve ter pelo menos 6 caracteres".to_string(),
        ));
    }
    Ok(())
}

/// Create/update payload checks. List fields arrive already typed, so only
/// the personal-data block needs validating.
pub fn validate_resume(resume: &Resume) -> Result<(), AppError> {
    if resume.personal_data.name.trim().is_empty() {
        return Err(AppError::Validation("Nome é obrigatório".to_string()));
    }
    if resume.personal_data.email.trim().is_empty()
        || !is_valid_email(resume.personal_data.email.trim())
    {
        return Err(AppError::Validation(
            "Email válido é obrigatório".to_string(),
        ));
    }
    Ok(())
}
