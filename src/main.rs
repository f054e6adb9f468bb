use clap::Parser;
use pac_membership::adapters::input::PromptInput;
use pac_membership::utils::{logger, validation::Validate};
use pac_membership::{CliConfig, CommandRunner, MembershipConfig, MembershipError};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), MembershipError> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            MembershipConfig::from_file(path)?
        }
        None => MembershipConfig::default(),
    };

    let mut engine = file_config.build_engine()?;
    let renderer = config.format.renderer();
    let mut input = PromptInput;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    CommandRunner::new(&mut engine, &*renderer, &mut input, &mut out).run(&config.command)
}
