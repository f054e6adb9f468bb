use pac_membership::core::catalog::TierCatalog;
use pac_membership::core::classifier::TierClassifier;
use pac_membership::{
    InMemoryRegistry, MembershipEngine, ScriptedInput, SharedSecretVerifier, Tier,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_is_deterministic_and_closed(expense in 0.0f64..1_000.0, income in 0.0f64..1_000.0) {
        let catalog = TierCatalog::default();
        let classifier = TierClassifier::new(&catalog);

        let first = classifier.nearest(expense, income).unwrap();
        let second = classifier.nearest(expense, income).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert!(Tier::ALL.contains(&first.tier));
        prop_assert_eq!(first.distances.len(), 3);

        let chosen = first.distance_to(first.tier).unwrap();
        prop_assert!(first.distances.iter().all(|d| chosen <= d.value));
    }

    #[test]
    fn net_total_is_gross_less_discount(prices in proptest::collection::vec(0.0f64..10_000_000.0, 0..20)) {
        let mut engine = MembershipEngine::new(
            TierCatalog::default(),
            InMemoryRegistry::seeded(),
            SharedSecretVerifier::default(),
        );
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut session = engine.open_session("Budi", &mut input).unwrap();
        engine.classify(&mut session, 7.0, 9.0).unwrap();

        let quote = engine.calculate_price(&session, &prices).unwrap();
        let gross: f64 = prices.iter().sum();
        let expected = gross * (1.0 - 0.10);

        prop_assert!((quote.net_total - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }
}
