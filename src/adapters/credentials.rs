use crate::core::CredentialVerifier;

pub const DEFAULT_IDENTITY_PHRASE: &str = "registered_member";
pub const DEFAULT_ADMIN_SECRET: &str = "pacmann";

/// One verification phrase shared by every returning member and one admin secret.
///
/// This is a placeholder, not authentication: anyone who knows the phrase and a
/// member's tier can claim that member's username. Replace it with per-user
/// credentials behind [`CredentialVerifier`] before relying on it.
#[derive(Clone)]
pub struct SharedSecretVerifier {
    identity_phrase: String,
    admin_secret: String,
}

impl SharedSecretVerifier {
    pub fn new(identity_phrase: impl Into<String>, admin_secret: impl Into<String>) -> Self {
        Self {
            identity_phrase: identity_phrase.into(),
            admin_secret: admin_secret.into(),
        }
    }
}

impl Default for SharedSecretVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY_PHRASE, DEFAULT_ADMIN_SECRET)
    }
}

impl std::fmt::Debug for SharedSecretVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretVerifier")
            .field("identity_phrase", &"<redacted>")
            .field("admin_secret", &"<redacted>")
            .finish()
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify_identity(&self, _username: &str, secret: &str) -> bool {
        secret == self.identity_phrase
    }

    fn verify_admin(&self, secret: &str) -> bool {
        secret == self.admin_secret
    }
}
