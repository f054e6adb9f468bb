use crate::core::admin;
use crate::core::catalog::TierCatalog;
use crate::core::classifier::TierClassifier;
use crate::core::pricing;
use crate::core::session::Session;
use crate::core::{CredentialInput, CredentialVerifier, MemberRegistry};
use crate::domain::model::{Classification, MemberEntry, PriceQuote, Tier};
use crate::utils::error::{MembershipError, Result};

/// Owns one registry, catalog and verifier and exposes every membership operation
/// against them. Single-threaded: callers hold `&mut` for the mutating operations.
pub struct MembershipEngine<R: MemberRegistry, V: CredentialVerifier> {
    catalog: TierCatalog,
    registry: R,
    verifier: V,
}

impl<R: MemberRegistry, V: CredentialVerifier> MembershipEngine<R, V> {
    pub fn new(catalog: TierCatalog, registry: R, verifier: V) -> Self {
        Self {
            catalog,
            registry,
            verifier,
        }
    }

    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Stored tier for `username`, or `NotFoundError`. Lets a caller fail before
    /// asking for the admin secret, the same order `remove_member` checks in.
    pub fn ensure_registered(&self, username: &str) -> Result<Tier> {
        self.registry
            .lookup(username)
            .ok_or_else(|| MembershipError::NotFoundError {
                username: username.to_string(),
            })
    }

    pub fn open_session<I: CredentialInput + ?Sized>(
        &self,
        username: &str,
        input: &mut I,
    ) -> Result<Session> {
        Session::open(username, &self.registry, &self.verifier, input)
    }

    pub fn classify(
        &mut self,
        session: &mut Session,
        monthly_expense: f64,
        monthly_income: f64,
    ) -> Result<Classification> {
        TierClassifier::new(&self.catalog).classify(
            session,
            &mut self.registry,
            monthly_expense,
            monthly_income,
        )
    }

    pub fn calculate_price(&self, session: &Session, prices: &[f64]) -> Result<PriceQuote> {
        pricing::calculate_price(&self.catalog, session, prices)
    }

    pub fn list_all_members(&self, secret: &str) -> Result<Vec<MemberEntry>> {
        admin::list_all_members(&self.registry, &self.verifier, secret)
    }

    pub fn remove_member(&mut self, username: &str, secret: &str) -> Result<Tier> {
        admin::remove_member(&mut self.registry, &self.verifier, username, secret)
    }
}
