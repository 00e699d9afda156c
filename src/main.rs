use std::process::ExitCode;

use clap::Parser;
use sms_notifier::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = cli::load_settings(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    tracing::debug!(
        name = %settings.application.name,
        version = %settings.application.version,
        "Configuration loaded"
    );
    for warning in settings.notification.warnings() {
        tracing::warn!("{}", warning);
    }

    let code = cli::execute_command(&cli, settings).await?;
    Ok(code)
}
