pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::CommandRunner;
#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    credentials::SharedSecretVerifier, input::ScriptedInput, registry::InMemoryRegistry,
    table::OutputFormat,
};
pub use config::MembershipConfig;
pub use crate::core::{catalog::TierCatalog, engine::MembershipEngine, session::Session};
pub use domain::model::{Classification, MemberEntry, MembershipStatus, PriceQuote, Tier};
pub use utils::currency::format_rupiah;
pub use utils::error::{MembershipError, Result};
