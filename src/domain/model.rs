use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership level. Catalog order is Platinum, Gold, Silver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Platinum,
    Gold,
    Silver,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Platinum, Tier::Gold, Tier::Silver];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Platinum => "Platinum",
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    /// Exact match only; a claimed tier must be spelled the way the registry stores it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| format!("unknown membership tier '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub tier: Tier,
    /// Fraction, e.g. 0.15 for 15%.
    pub discount_rate: f64,
    pub benefit: String,
    pub reference_expense: f64,
    pub reference_income: f64,
}

impl TierProfile {
    pub fn reference_point(&self) -> (f64, f64) {
        (self.reference_expense, self.reference_income)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry {
    pub username: String,
    pub tier: Tier,
}

impl MemberEntry {
    pub fn new(username: impl Into<String>, tier: Tier) -> Self {
        Self {
            username: username.into(),
            tier,
        }
    }
}

/// Rounded euclidean distance from a user's point to one tier's reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub tier: Tier,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub tier: Tier,
    pub distances: Vec<Distance>,
}

impl Classification {
    pub fn distance_to(&self, tier: Tier) -> Option<f64> {
        self.distances
            .iter()
            .find(|d| d.tier == tier)
            .map(|d| d.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub tier: Tier,
    pub gross: f64,
    pub discount_amount: f64,
    pub net_total: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipStatus {
    NotYetMember { username: String },
    Member { username: String, tier: Tier },
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipStatus::NotYetMember { username } => write!(
                f,
                "User {} is not yet a member. Please run 'classify' first.",
                username
            ),
            MembershipStatus::Member { username, tier } => {
                write!(f, "User {} is currently a {} Member.", username, tier)
            }
        }
    }
}
