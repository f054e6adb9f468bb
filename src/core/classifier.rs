use crate::core::session::Session;
use crate::core::{CatalogProvider, MemberRegistry};
use crate::domain::model::{Classification, Distance};
use crate::utils::error::{MembershipError, Result};
use crate::utils::validation::validate_amount;

/// Nearest-reference-point classifier.
///
/// Distances are rounded to two decimals (half away from zero) before comparison.
/// On equal rounded distances the tier that comes first in catalog order wins, so
/// ties resolve toward the higher tier. That is a policy, not a property of the data.
pub struct TierClassifier<'a, C: CatalogProvider + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogProvider + ?Sized> TierClassifier<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    pub fn distances(&self, expense: f64, income: f64) -> Vec<Distance> {
        self.catalog
            .profiles()
            .iter()
            .map(|profile| {
                let (ref_expense, ref_income) = profile.reference_point();
                let d = ((expense - ref_expense).powi(2) + (income - ref_income).powi(2)).sqrt();
                Distance {
                    tier: profile.tier,
                    value: round2(d),
                }
            })
            .collect()
    }

    /// Pure part of classification: no session or registry involved.
    pub fn nearest(&self, expense: f64, income: f64) -> Result<Classification> {
        validate_amount("monthly_expense", expense)?;
        validate_amount("monthly_income", income)?;

        let distances = self.distances(expense, income);
        let mut best: Option<Distance> = None;
        for distance in &distances {
            // strict comparison keeps the earliest tier on ties
            if best.map_or(true, |b| distance.value < b.value) {
                best = Some(*distance);
            }
        }

        let tier = best
            .map(|d| d.tier)
            .ok_or_else(|| MembershipError::ConfigError {
                message: "tier catalog is empty".to_string(),
            })?;

        Ok(Classification { tier, distances })
    }

    /// Classifies the session's user and records the result on the session and in
    /// the registry, overwriting any previous tier.
    pub fn classify<R: MemberRegistry + ?Sized>(
        &self,
        session: &mut Session,
        registry: &mut R,
        expense: f64,
        income: f64,
    ) -> Result<Classification> {
        let classification = self.nearest(expense, income)?;
        for distance in &classification.distances {
            tracing::debug!(
                "Distance for {} to {}: {:.2}",
                session.username(),
                distance.tier,
                distance.value
            );
        }

        session.record_classification(expense, income, classification.tier);
        registry.upsert(session.username(), classification.tier);

        tracing::info!(
            "Classified {} as {} (expense={}, income={})",
            session.username(),
            classification.tier,
            expense,
            income
        );
        Ok(classification)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats distances as `{Platinum: 6.08, Gold: 1.41, Silver: 2.83}`.
pub fn format_distances(distances: &[Distance]) -> String {
    let parts: Vec<String> = distances
        .iter()
        .map(|d| format!("{}: {:.2}", d.tier, d.value))
        .collect();
    format!("{{{}}}", parts.join(", "))
}
