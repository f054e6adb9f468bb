use crate::core::{CredentialInput, CredentialVerifier, MemberRegistry};
use crate::domain::model::{MembershipStatus, Tier};
use crate::utils::error::{MembershipError, Result};
use crate::utils::validation::validate_username;

pub const CLAIMED_TIER_LABEL: &str = "Your membership type";
pub const SECRET_LABEL: &str = "Your user password";

/// Working context for one user's interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    username: String,
    monthly_expense: Option<f64>,
    monthly_income: Option<f64>,
    membership: Option<Tier>,
    verified: bool,
}

impl Session {
    /// Opens a session, running identity verification first when the username is
    /// already registered. No session is produced if verification fails.
    pub fn open<R, V, I>(username: &str, registry: &R, verifier: &V, input: &mut I) -> Result<Self>
    where
        R: MemberRegistry + ?Sized,
        V: CredentialVerifier + ?Sized,
        I: CredentialInput + ?Sized,
    {
        validate_username("username", username)?;

        let membership = verify_identity(username, registry, verifier, input)?;

        Ok(Self {
            username: username.to_string(),
            monthly_expense: None,
            monthly_income: None,
            membership,
            verified: membership.is_some(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn monthly_expense(&self) -> Option<f64> {
        self.monthly_expense
    }

    pub fn monthly_income(&self) -> Option<f64> {
        self.monthly_income
    }

    pub fn membership(&self) -> Option<Tier> {
        self.membership
    }

    /// True when the session belongs to a returning member who passed verification.
    pub fn is_verified_member(&self) -> bool {
        self.verified
    }

    pub fn status(&self) -> MembershipStatus {
        match self.membership {
            Some(tier) => MembershipStatus::Member {
                username: self.username.clone(),
                tier,
            },
            None => MembershipStatus::NotYetMember {
                username: self.username.clone(),
            },
        }
    }

    pub(crate) fn record_classification(&mut self, expense: f64, income: f64, tier: Tier) {
        self.monthly_expense = Some(expense);
        self.monthly_income = Some(income);
        self.membership = Some(tier);
    }
}

/// Returns the stored tier for a registered username once the caller confirms it
/// together with the shared verification phrase, or `None` for unknown usernames.
pub fn verify_identity<R, V, I>(
    username: &str,
    registry: &R,
    verifier: &V,
    input: &mut I,
) -> Result<Option<Tier>>
where
    R: MemberRegistry + ?Sized,
    V: CredentialVerifier + ?Sized,
    I: CredentialInput + ?Sized,
{
    let Some(stored) = registry.lookup(username) else {
        tracing::debug!("{} is not registered, no verification needed", username);
        return Ok(None);
    };

    let claimed = input.prompt(CLAIMED_TIER_LABEL)?;
    let secret = input.prompt_secret(SECRET_LABEL)?;

    let tier_matches = claimed.parse::<Tier>().is_ok_and(|tier| tier == stored);
    if tier_matches && verifier.verify_identity(username, &secret) {
        tracing::info!("Verified returning member {} ({})", username, stored);
        Ok(Some(stored))
    } else {
        tracing::warn!("Identity verification failed for {}", username);
        Err(MembershipError::AuthenticationError {
            username: username.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::credentials::SharedSecretVerifier;
    use crate::adapters::input::ScriptedInput;
    use crate::adapters::registry::InMemoryRegistry;

    fn seeded() -> InMemoryRegistry {
        InMemoryRegistry::seeded()
    }

    #[test]
    fn test_unknown_username_needs_no_verification() {
        let registry = seeded();
        let mut input = ScriptedInput::new(Vec::<String>::new());

        let session =
            Session::open("Budi", &registry, &SharedSecretVerifier::default(), &mut input).unwrap();

        assert_eq!(session.membership(), None);
        assert!(!session.is_verified_member());
        assert_eq!(input.prompts_seen(), 0);
    }

    #[test]
    fn test_returning_member_with_correct_answers() {
        let registry = seeded();
        let mut input = ScriptedInput::new(["Gold", "registered_member"]);

        let session =
            Session::open("Ana", &registry, &SharedSecretVerifier::default(), &mut input).unwrap();

        assert_eq!(session.membership(), Some(Tier::Gold));
        assert!(session.is_verified_member());
        assert_eq!(session.monthly_expense(), None);
        assert_eq!(session.monthly_income(), None);
    }

    #[test]
    fn test_wrong_tier_or_secret_is_rejected() {
        let registry = seeded();
        let verifier = SharedSecretVerifier::default();

        for answers in [
            ["Platinum", "registered_member"],
            ["Gold", "wrong"],
            ["Silver", "nope"],
            ["gold", "registered_member"],
            [" Gold ", "registered_member"],
            ["Gold\t", "registered_member"],
        ] {
            let mut input = ScriptedInput::new(answers);
            let err = Session::open("Ana", &registry, &verifier, &mut input).unwrap_err();
            assert!(
                matches!(err, MembershipError::AuthenticationError { ref username } if username == "Ana")
            );
        }
    }

    #[test]
    fn test_empty_username_is_invalid() {
        let registry = seeded();
        let mut input = ScriptedInput::new(Vec::<String>::new());

        let err = Session::open("  ", &registry, &SharedSecretVerifier::default(), &mut input)
            .unwrap_err();
        assert!(matches!(err, MembershipError::ValidationError { .. }));
    }
}
