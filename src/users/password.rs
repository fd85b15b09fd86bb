//! Password-change validation chain
//!
//! Every rule violation raises a `UserError`; the HTTP handler catches it once
//! and turns it into a flash message. Nothing here touches the response layer.

use serde::Deserialize;
use thiserror::Error;

use super::service::UsersService;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Domain failures of the password-change flow
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("CSRF Token not in session")]
    CsrfTokenMissing,
    #[error("CSRF Token mismatch")]
    CsrfTokenMismatch,
    #[error("Password too small")]
    PasswordTooSmall,
    #[error("Password not same")]
    PasswordNotSame,
    #[error("User data could not be changed")]
    UpdateFailed,
}

/// The posted password form
///
/// Fields default to empty so a malformed post still reaches the validation
/// chain and leaves as a flash redirect, not an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChangeInput {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub edit_password: String,
    #[serde(default)]
    pub repeat_password: String,
}

/// Validate the posted form against the session token and apply the change
///
/// `session_token` is the CSRF token stored in the caller's session, resolved
/// by the middleware stage; `uid` is the authenticated user.
pub fn apply_password_change(
    users: &UsersService,
    session_token: Option<&str>,
    uid: u64,
    input: &PasswordChangeInput,
) -> Result<(), UserError> {
    let token = session_token.ok_or(UserError::CsrfTokenMissing)?;
    if input.csrf_token != token {
        return Err(UserError::CsrfTokenMismatch);
    }
    if input.edit_password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooSmall);
    }
    if input.edit_password != input.repeat_password {
        return Err(UserError::PasswordNotSame);
    }
    if users.update_password(uid, &input.edit_password) != 1 {
        return Err(UserError::UpdateFailed);
    }
    Ok(())
}
