//! Driving port that turns credentials into a caller identity.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Authenticate credentials and return the matching user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve `credentials` to a [`UserId`] or fail with `unauthorized`.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Username accepted by [`FixtureLoginService`].
pub const FIXTURE_USERNAME: &str = "admin";
/// Password accepted by [`FixtureLoginService`].
pub const FIXTURE_PASSWORD: &str = "password";
/// Identity returned by [`FixtureLoginService`].
pub const FIXTURE_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// Fixed-credential login used until a credential store is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.username() != FIXTURE_USERNAME || credentials.password() != FIXTURE_PASSWORD
        {
            return Err(Error::unauthorized("invalid credentials"));
        }
        UserId::new(FIXTURE_USER_ID)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
    }
}
