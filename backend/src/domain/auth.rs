//! Login credentials exchanged for a session identity.

use std::fmt;

use zeroize::Zeroizing;

/// Reasons a login payload is rejected before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username missing or blank once trimmed.
    EmptyUsername,
    /// Password missing.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => f.write_str("username must not be empty"),
            Self::EmptyPassword => f.write_str("password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Username and password pair. The password buffer is wiped on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw inputs; the username is trimmed, the password kept verbatim.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Trimmed username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password as supplied.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyUsername)]
    #[case("  ", "pw", LoginValidationError::EmptyUsername)]
    #[case("host", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password).expect_err("invalid");
        assert_eq!(err, expected);
    }

    #[test]
    fn trims_username_only() {
        let creds = LoginCredentials::try_from_parts("  host ", " pw ").expect("valid");
        assert_eq!(creds.username(), "host");
        assert_eq!(creds.password(), " pw ");
    }
}
