// Application layer: drives the membership engine from CLI commands.

pub mod commands;

pub use commands::CommandRunner;
