use serde::{Deserialize, Serialize};

/// Authentication provider that issued an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthProvider {
    Password,
    Google,
    Github,
}

/// Signed-in user handle.
///
/// Created by the external sign-in flow and destroyed on sign-out; this
/// system only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub provider: AuthProvider,
}

impl Identity {
    /// Whether a change-password affordance applies. Federated accounts
    /// manage credentials with their provider, never here.
    pub fn is_password_provider(&self) -> bool {
        self.provider == AuthProvider::Password
    }

    /// Display label for compact UI, falling back to the email address.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Session gate predicate: bookmark operations require a signed-in identity.
pub fn has_identity(identity: Option<&Identity>) -> bool {
    identity.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(provider: AuthProvider) -> Identity {
        Identity {
            id: "u-1".to_string(),
            email: "trader@cryptohub.dev".to_string(),
            display_name: None,
            photo_url: None,
            provider,
        }
    }

    #[test]
    fn test_change_password_only_for_password_provider() {
        assert!(identity(AuthProvider::Password).is_password_provider());
        assert!(!identity(AuthProvider::Google).is_password_provider());
        assert!(!identity(AuthProvider::Github).is_password_provider());
    }

    #[test]
    fn test_label_falls_back_to_email() {
        let mut id = identity(AuthProvider::Password);
        assert_eq!(id.label(), "trader@cryptohub.dev");

        id.display_name = Some("Trader".to_string());
        assert_eq!(id.label(), "Trader");
    }

    #[test]
    fn test_has_identity() {
        let id = identity(AuthProvider::Google);
        assert!(has_identity(Some(&id)));
        assert!(!has_identity(None));
    }
}
