use crate::core::{MemberEntry, MemberRegistry, Tier};
use crate::utils::error::{MembershipError, Result};

/// Process-lifetime registry. Listing follows insertion order; an upsert of an
/// existing username keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRegistry {
    entries: Vec<MemberEntry>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = MemberEntry>,
    {
        let mut registry = Self::new();
        for member in members {
            registry.upsert(&member.username, member.tier);
        }
        registry
    }

    /// The initial member set shipped with the program.
    pub fn seeded() -> Self {
        Self::with_members(default_members())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.username == username)
    }
}

impl MemberRegistry for InMemoryRegistry {
    fn lookup(&self, username: &str) -> Option<Tier> {
        self.position(username).map(|i| self.entries[i].tier)
    }

    fn upsert(&mut self, username: &str, tier: Tier) {
        match self.position(username) {
            Some(i) => self.entries[i].tier = tier,
            None => self.entries.push(MemberEntry::new(username, tier)),
        }
        tracing::debug!("Registry upsert: {} -> {}", username, tier);
    }

    fn remove(&mut self, username: &str) -> Result<Tier> {
        let i = self
            .position(username)
            .ok_or_else(|| MembershipError::NotFoundError {
                username: username.to_string(),
            })?;
        let removed = self.entries.remove(i);
        tracing::debug!("Registry remove: {} ({})", username, removed.tier);
        Ok(removed.tier)
    }

    fn all_entries(&self) -> Vec<MemberEntry> {
        self.entries.clone()
    }
}

pub fn default_members() -> Vec<MemberEntry> {
    vec![
        MemberEntry::new("Sumbul", Tier::Platinum),
        MemberEntry::new("Ana", Tier::Gold),
        MemberEntry::new("Cahya", Tier::Platinum),
    ]
}
