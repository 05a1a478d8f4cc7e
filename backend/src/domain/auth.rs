//! Operator sign-in primitives.
//!
//! The service desk runs on exactly two operator accounts, so authentication
//! stays small: a validated username/password pair going in, and an
//! [`OperatorIdentity`] with the admin flag coming out. Raw request strings
//! are parsed here so adapters never hand unchecked input to a login port.

use std::fmt;

use zeroize::Zeroizing;

/// Validated sign-in pair handed to the login port.
///
/// The username is stored trimmed. Password whitespace is preserved; it is
/// part of the secret.
///
/// # Examples
/// ```
/// use repair_backend::domain::LoginCredentials;
///
/// let credentials = LoginCredentials::try_from_parts(" desk ", "secret").unwrap();
/// assert_eq!(credentials.username(), "desk");
/// assert_eq!(credentials.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Build credentials from raw request values.
    ///
    /// # Errors
    /// Returns [`LoginValidationError`] when the trimmed username or the
    /// password is empty.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: trimmed.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for account lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password exactly as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Reasons a raw sign-in payload fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username missing, or blank once trimmed.
    EmptyUsername,
    /// Password missing or blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::EmptyUsername => "username is required",
            Self::EmptyPassword => "password is required",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for LoginValidationError {}

/// Identity of a successfully authenticated operator.
///
/// The admin flag is the only role granularity the workflow has; it gates
/// nothing on the appointment routes and exists for the frontend to show or
/// hide administrative views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorIdentity {
    username: String,
    is_admin: bool,
}

impl OperatorIdentity {
    /// Construct an identity for a signed-in operator.
    #[must_use]
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }

    /// Operator username as stored in the session.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Whether the operator signed in with the administrative account.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
