use crate::domain::model::{MemberEntry, Tier, TierProfile};
use crate::utils::error::Result;

/// Username to tier store. Sessions and admin operations receive it explicitly.
pub trait MemberRegistry {
    fn lookup(&self, username: &str) -> Option<Tier>;
    fn upsert(&mut self, username: &str, tier: Tier);
    /// Fails with `NotFoundError` when the username is absent.
    fn remove(&mut self, username: &str) -> Result<Tier>;
    fn all_entries(&self) -> Vec<MemberEntry>;

    fn contains(&self, username: &str) -> bool {
        self.lookup(username).is_some()
    }
}

/// Placeholder credential checks. Swap the implementation for real
/// per-user credentials without touching session or admin logic.
pub trait CredentialVerifier {
    fn verify_identity(&self, username: &str, secret: &str) -> bool;
    fn verify_admin(&self, secret: &str) -> bool;
}

/// Synchronous line-oriented input from an operator.
pub trait CredentialInput {
    fn prompt(&mut self, label: &str) -> Result<String>;
    fn prompt_secret(&mut self, label: &str) -> Result<String> {
        self.prompt(label)
    }
}

pub trait CatalogProvider {
    fn profile(&self, tier: Tier) -> &TierProfile;
    /// Profiles in catalog order.
    fn profiles(&self) -> &[TierProfile];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from `(header, cells)` columns. Short columns are padded with empty cells.
    pub fn from_columns(columns: Vec<(String, Vec<String>)>) -> Self {
        let height = columns.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
        let headers = columns.iter().map(|(header, _)| header.clone()).collect();
        let rows = (0..height)
            .map(|i| {
                columns
                    .iter()
                    .map(|(_, cells)| cells.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }
}

pub trait TableRenderer {
    fn render(&self, table: &Table) -> Result<String>;
}
