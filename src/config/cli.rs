use crate::adapters::table::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pac-membership")]
#[command(about = "PacCommerce membership tiers, member registry and discounts")]
pub struct CliConfig {
    /// Path to a TOML file overriding the catalog, secrets or seed members
    #[arg(short, long)]
    pub config: Option<String>,

    /// Table output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Show the benefits of every membership tier
    Benefits,

    /// Show the monthly expense and income reference point of every tier
    Requirements,

    /// Classify a user into the nearest tier and register them
    Classify {
        username: String,
        /// Monthly expense, in millions
        #[arg(long, allow_hyphen_values = true)]
        expense: String,
        /// Monthly income, in millions
        #[arg(long, allow_hyphen_values = true)]
        income: String,
    },

    /// Show a user's current membership
    Status { username: String },

    /// Total a purchase with the user's membership discount
    Price {
        username: String,
        /// Classify first with this monthly expense
        #[arg(long, requires = "income", allow_hyphen_values = true)]
        expense: Option<String>,
        /// Classify first with this monthly income
        #[arg(long, requires = "expense", allow_hyphen_values = true)]
        income: Option<String>,
        /// Item prices
        prices: Vec<String>,
    },

    /// List all registered members (admin only)
    Members,

    /// Remove a registered member (admin only)
    Remove { username: String },

    /// Run commands interactively against one in-memory registry
    Shell,
}

/// One line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "pac", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let config = CliConfig::try_parse_from([
            "pac-membership",
            "--format",
            "csv",
            "classify",
            "Budi",
            "--expense",
            "7",
            "--income",
            "9",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(
            config.command,
            Command::Classify {
                username: "Budi".to_string(),
                expense: "7".to_string(),
                income: "9".to_string(),
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_price_requires_both_amounts() {
        assert!(CliConfig::try_parse_from([
            "pac-membership",
            "price",
            "Budi",
            "--expense",
            "7",
            "100000"
        ])
        .is_err());
    }

    #[test]
    fn test_shell_line() {
        let line = ShellLine::try_parse_from("remove Ana".split_whitespace()).unwrap();
        assert_eq!(
            line.command,
            Command::Remove {
                username: "Ana".to_string()
            }
        );
    }

    #[test]
    fn test_empty_config_path_is_invalid() {
        let config =
            CliConfig::try_parse_from(["pac-membership", "--config", "", "benefits"]).unwrap();
        assert!(config.validate().is_err());
    }
}
