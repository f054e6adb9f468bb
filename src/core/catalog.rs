use crate::core::CatalogProvider;
use crate::domain::model::{Tier, TierProfile};
use crate::domain::ports::Table;

/// Static tier reference data. Reference values are monthly amounts in millions of Rupiah.
#[derive(Debug, Clone, PartialEq)]
pub struct TierCatalog {
    profiles: Vec<TierProfile>,
}

impl TierCatalog {
    /// Builds a catalog from one profile per tier. Profiles are reordered into catalog
    /// order; a missing tier falls back to its built-in profile.
    pub fn new(profiles: Vec<TierProfile>) -> Self {
        let profiles = Tier::ALL
            .into_iter()
            .map(|tier| {
                profiles
                    .iter()
                    .find(|p| p.tier == tier)
                    .cloned()
                    .unwrap_or_else(|| default_profile(tier))
            })
            .collect();
        Self { profiles }
    }

    pub fn discount_rate(&self, tier: Tier) -> f64 {
        self.profile(tier).discount_rate
    }

    pub fn reference_point(&self, tier: Tier) -> (f64, f64) {
        self.profile(tier).reference_point()
    }

    pub fn benefit_description(&self, tier: Tier) -> &str {
        &self.profile(tier).benefit
    }

    pub fn benefits_table(&self) -> Table {
        Table::from_columns(vec![
            ("Membership".to_string(), self.column(|p| p.tier.to_string())),
            (
                "Discount".to_string(),
                self.column(|p| format!("{}%", format_number(p.discount_rate * 100.0))),
            ),
            ("Another Benefit".to_string(), self.column(|p| p.benefit.clone())),
        ])
    }

    pub fn requirements_table(&self) -> Table {
        Table::from_columns(vec![
            ("Membership".to_string(), self.column(|p| p.tier.to_string())),
            (
                "Monthly Expense (million)".to_string(),
                self.column(|p| format_number(p.reference_expense)),
            ),
            (
                "Monthly Income (million)".to_string(),
                self.column(|p| format_number(p.reference_income)),
            ),
        ])
    }

    fn column<F: Fn(&TierProfile) -> String>(&self, cell: F) -> Vec<String> {
        self.profiles.iter().map(cell).collect()
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self {
            profiles: Tier::ALL.into_iter().map(default_profile).collect(),
        }
    }
}

impl CatalogProvider for TierCatalog {
    fn profile(&self, tier: Tier) -> &TierProfile {
        // One profile per tier, stored in declaration order.
        &self.profiles[tier as usize]
    }

    fn profiles(&self) -> &[TierProfile] {
        &self.profiles
    }
}

pub fn default_profile(tier: Tier) -> TierProfile {
    let (discount_rate, reference_expense, reference_income, benefit) = match tier {
        Tier::Platinum => (
            0.15,
            8.0,
            15.0,
            "Silver & Gold Benefits + Holiday Vouchers + Cashback up to 30%",
        ),
        Tier::Gold => (0.10, 6.0, 10.0, "Silver Benefits + Online Ride Voucher"),
        Tier::Silver => (0.08, 5.0, 7.0, "Meal Voucher"),
    };

    TierProfile {
        tier,
        discount_rate,
        benefit: benefit.to_string(),
        reference_expense,
        reference_income,
    }
}

/// Whole numbers print without a fraction, anything else keeps up to two decimals.
fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
