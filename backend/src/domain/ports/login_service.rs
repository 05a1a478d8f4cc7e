//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing the backing account source. That
//! keeps HTTP handler tests deterministic because they can wire a service
//! with known accounts instead of reading the deployment environment.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{Error, LoginCredentials, OperatorIdentity};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated operator identity.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<OperatorIdentity, Error>;
}

/// One configured account for the static credential scheme.
#[derive(Debug, Clone)]
pub struct StaticAccount {
    username: String,
    password: Zeroizing<String>,
}

impl StaticAccount {
    /// Construct an account from configured username/password values.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Configured username for this account.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    fn matches(&self, credentials: &LoginCredentials) -> bool {
        credentials.username() == self.username && credentials.password() == self.password.as_str()
    }
}

/// Authenticator comparing credentials against two fixed accounts.
///
/// This reproduces the deployed scheme exactly: one administrative account and
/// one plain operator account, both supplied through configuration, compared
/// verbatim with no hashing. An account whose password was never configured
/// can never match. The admin flag is granted when the presented username is
/// the administrative one, so an operator account configured with the admin
/// username signs in as admin.
#[derive(Debug, Clone, Default)]
pub struct StaticLoginService {
    admin: Option<StaticAccount>,
    operator: Option<StaticAccount>,
}

impl StaticLoginService {
    /// Build the service from optional admin and operator accounts.
    #[must_use]
    pub fn new(admin: Option<StaticAccount>, operator: Option<StaticAccount>) -> Self {
        Self { admin, operator }
    }

    fn is_admin_username(&self, username: &str) -> bool {
        self.admin
            .as_ref()
            .is_some_and(|account| account.username() == username)
    }
}

#[async_trait]
impl LoginService for StaticLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<OperatorIdentity, Error> {
        let matched = [self.admin.as_ref(), self.operator.as_ref()]
            .into_iter()
            .flatten()
            .any(|account| account.matches(credentials));

        if matched {
            Ok(OperatorIdentity::new(
                credentials.username(),
                self.is_admin_username(credentials.username()),
            ))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
