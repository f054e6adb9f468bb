use crate::core::session::Session;
use crate::core::CatalogProvider;
use crate::domain::model::PriceQuote;
use crate::utils::currency::format_rupiah;
use crate::utils::error::{MembershipError, Result};
use crate::utils::validation::validate_amount;

/// Applies the session's tier discount to the sum of `prices`.
pub fn calculate_price<C: CatalogProvider + ?Sized>(
    catalog: &C,
    session: &Session,
    prices: &[f64],
) -> Result<PriceQuote> {
    let tier = session.membership().ok_or_else(|| MembershipError::StateError {
        username: session.username().to_string(),
        message: "is not yet a member. Please run 'classify' first.".to_string(),
    })?;

    for (i, price) in prices.iter().enumerate() {
        validate_amount(&format!("price_list[{}]", i), *price)?;
    }

    let gross: f64 = prices.iter().sum();
    let discount_amount = gross * catalog.profile(tier).discount_rate;
    let net_total = gross - discount_amount;

    tracing::info!(
        "Price quote for {} ({}): gross={:.2}, discount={:.2}, net={:.2}",
        session.username(),
        tier,
        gross,
        discount_amount,
        net_total
    );

    Ok(PriceQuote {
        tier,
        gross,
        discount_amount,
        net_total,
    })
}

impl PriceQuote {
    /// Customer-facing lines with both figures in Rupiah.
    pub fn summary(&self, username: &str) -> Vec<String> {
        vec![
            format!(
                "Congratulations! You received a membership discount of {} in this transaction.",
                format_rupiah(self.discount_amount)
            ),
            format!("Total amount payable by user {} is:", username),
            format_rupiah(self.net_total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::credentials::SharedSecretVerifier;
    use crate::adapters::input::ScriptedInput;
    use crate::adapters::registry::InMemoryRegistry;
    use crate::core::catalog::TierCatalog;
    use crate::domain::model::Tier;

    #[test]
    fn test_unclassified_session_cannot_be_priced() {
        let registry = InMemoryRegistry::seeded();
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let session =
            Session::open("Budi", &registry, &SharedSecretVerifier::default(), &mut input).unwrap();

        let err = calculate_price(&TierCatalog::default(), &session, &[100_000.0]).unwrap_err();
        assert!(
            matches!(err, MembershipError::StateError { ref username, .. } if username == "Budi")
        );
    }

    #[test]
    fn test_gold_member_gets_ten_percent() {
        let registry = InMemoryRegistry::seeded();
        let mut input = ScriptedInput::new(["Gold", "registered_member"]);
        let session =
            Session::open("Ana", &registry, &SharedSecretVerifier::default(), &mut input).unwrap();

        let quote = calculate_price(
            &TierCatalog::default(),
            &session,
            &[300_000.0, 150_000.0, 50_000.0],
        )
        .unwrap();

        assert_eq!(quote.tier, Tier::Gold);
        assert_eq!(quote.gross, 500_000.0);
        assert!((quote.discount_amount - 50_000.0).abs() < 1e-6);
        assert!((quote.net_total - 450_000.0).abs() < 1e-6);
        assert_eq!(
            quote.summary("Ana"),
            vec![
                "Congratulations! You received a membership discount of Rp 50.000,00 in this transaction.",
                "Total amount payable by user Ana is:",
                "Rp 450.000,00",
            ]
        );
    }

    #[test]
    fn test_empty_price_list_is_zero() {
        let registry = InMemoryRegistry::seeded();
        let mut input = ScriptedInput::new(["Platinum", "registered_member"]);
        let session =
            Session::open("Sumbul", &registry, &SharedSecretVerifier::default(), &mut input)
                .unwrap();

        let quote = calculate_price(&TierCatalog::default(), &session, &[]).unwrap();
        assert_eq!(quote.net_total, 0.0);
        assert_eq!(format_rupiah(quote.net_total), "Rp 0,00");
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        let registry = InMemoryRegistry::seeded();
        let mut input = ScriptedInput::new(["Platinum", "registered_member"]);
        let session =
            Session::open("Cahya", &registry, &SharedSecretVerifier::default(), &mut input)
                .unwrap();

        let err =
            calculate_price(&TierCatalog::default(), &session, &[10.0, f64::INFINITY]).unwrap_err();
        assert!(
            matches!(err, MembershipError::ValidationError { ref field, .. } if field == "price_list[1]")
        );
    }
}
