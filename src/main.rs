use clap::Parser;
use tracing::info;

use cupwatch::AppError;
use cupwatch::app;
use cupwatch::cli::Args;
use cupwatch::commands::{handle_config_commands, validate_args};
use cupwatch::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Config operations complete without logging setup or network access
    if handle_config_commands(&args).await? {
        return Ok(());
    }

    // The guard must stay alive so buffered log lines reach the file
    let (log_file_path, _guard) = setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");
    info!("cupwatch {} starting", cupwatch::VERSION);

    app::run(&args).await
}
