use crate::cli::{Args, is_config_operation};
use crate::config::Config;
use crate::error::AppError;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together or a
/// required argument is missing.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.competition.is_none() && !is_config_operation(args) {
        return Err(AppError::config_error(
            "A competition is required: pass one with --competition (-c)",
        ));
    }
    if args.round.is_some() && args.list_rounds {
        return Err(AppError::config_error(
            "Cannot use both --round and --list-rounds simultaneously",
        ));
    }
    Ok(())
}

/// Handles configuration commands (--set-api-domain, --set-log-file,
/// --clear-log-file, --list-config).
///
/// Returns `true` when a config operation was handled and the program
/// should exit without fetching any data.
pub async fn handle_config_commands(args: &Args) -> Result<bool, AppError> {
    if !is_config_operation(args) {
        return Ok(false);
    }

    if args.list_config {
        Config::display().await?;
        return Ok(true);
    }

    let mut config = Config::load().await.unwrap_or_else(|_| Config {
        api_domain: String::new(),
        log_file_path: None,
        http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    });

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(true)
}
