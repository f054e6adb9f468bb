// Adapters layer: concrete implementations of the domain ports (registry, credentials, input, tables).

pub mod credentials;
pub mod input;
pub mod registry;
pub mod table;
