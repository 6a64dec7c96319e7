//! Host sub-controllers supplying device and session identity.

use async_trait::async_trait;

/// Minimal view of the host SDK's current user.
///
/// The transport only needs the session token; everything else about the
/// user stays on the host side of the seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    session_token: Option<String>,
}

impl User {
    /// Creates a user carrying a session token.
    #[must_use]
    pub fn with_session_token(token: impl Into<String>) -> Self {
        Self {
            session_token: Some(token.into()),
        }
    }

    /// Creates a user without a session token.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            session_token: None,
        }
    }

    /// Returns the session token, if the user has one.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

/// Supplies the device installation id attached to every request.
#[async_trait]
pub trait InstallationController: Send + Sync {
    /// Returns the current installation id, creating one if needed.
    async fn current_installation_id(&self) -> String;
}

/// Supplies the currently logged-in user, when the host tracks one.
///
/// This controller is optional; a transport built without one simply omits
/// the session token unless the caller provides it per request.
#[async_trait]
pub trait UserController: Send + Sync {
    /// Returns the current user, or `None` when nobody is logged in.
    async fn current_user(&self) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_session_token() {
        let user = User::with_session_token("5678");
        assert_eq!(user.session_token(), Some("5678"));

        let user = User::anonymous();
        assert_eq!(user.session_token(), None);
    }
}
