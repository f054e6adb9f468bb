use crate::core::{CredentialVerifier, MemberRegistry};
use crate::domain::model::{MemberEntry, Tier};
use crate::domain::ports::Table;
use crate::utils::error::{MembershipError, Result};

pub const ADMIN_SECRET_LABEL: &str = "Enter admin password";

/// Registry listing, gated behind the admin secret.
pub fn list_all_members<R, V>(registry: &R, verifier: &V, secret: &str) -> Result<Vec<MemberEntry>>
where
    R: MemberRegistry + ?Sized,
    V: CredentialVerifier + ?Sized,
{
    authorize(verifier, secret, "view registered members")?;
    tracing::info!("Access granted. Listing registered members");
    Ok(registry.all_entries())
}

/// Removes a member, gated behind the admin secret.
///
/// Existence is checked before the secret, so an unauthorized caller can still
/// learn whether a username is registered.
pub fn remove_member<R, V>(registry: &mut R, verifier: &V, username: &str, secret: &str) -> Result<Tier>
where
    R: MemberRegistry + ?Sized,
    V: CredentialVerifier + ?Sized,
{
    if !registry.contains(username) {
        return Err(MembershipError::NotFoundError {
            username: username.to_string(),
        });
    }

    authorize(verifier, secret, "remove members")?;

    let removed = registry.remove(username)?;
    tracing::info!("Access granted. User '{}' ({}) has been removed", username, removed);
    Ok(removed)
}

pub fn members_table(entries: &[MemberEntry]) -> Table {
    Table::from_columns(vec![
        (
            "Name".to_string(),
            entries.iter().map(|e| e.username.clone()).collect(),
        ),
        (
            "Membership".to_string(),
            entries.iter().map(|e| e.tier.to_string()).collect(),
        ),
    ])
}

fn authorize<V: CredentialVerifier + ?Sized>(verifier: &V, secret: &str, operation: &str) -> Result<()> {
    if verifier.verify_admin(secret) {
        Ok(())
    } else {
        tracing::warn!("Admin access denied: {}", operation);
        Err(MembershipError::AuthorizationError {
            operation: operation.to_string(),
        })
    }
}
