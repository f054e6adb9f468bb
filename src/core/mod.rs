pub mod admin;
pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod pricing;
pub mod session;

pub use crate::domain::model::{MemberEntry, Tier, TierProfile};
pub use crate::domain::ports::{
    CatalogProvider, CredentialInput, CredentialVerifier, MemberRegistry, TableRenderer,
};
pub use crate::utils::error::Result;
