use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration.
/// Config operations run without fetching any fixture data:
/// - --set-api-domain updates the stored API domain
/// - --set-log-file / --clear-log-file manage the log location
/// - --list-config prints the current settings
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Football Cup Competition Viewer
///
/// A terminal viewer for knockout cup competitions. Shows two-legged ties
/// with aggregate scores, away goals and advancing teams, built from a
/// fixtures API.
///
/// Rounds are classified automatically: knockout rounds are displayed as a
/// bracket, league-phase rounds are listed, and qualifying rounds are set
/// aside.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Competition identifier to fetch, e.g. "champions-cup".
    #[arg(short = 'c', long = "competition", help_heading = "Data Options")]
    pub competition: Option<String>,

    /// Season start year. Defaults to the season in progress.
    #[arg(short = 's', long = "season", help_heading = "Data Options")]
    pub season: Option<i32>,

    /// Show a single knockout round, by label or id (e.g. "semi-final").
    #[arg(short = 'r', long = "round", help_heading = "Display Options")]
    pub round: Option<String>,

    /// List the competition's rounds and how each was classified.
    #[arg(long = "list-rounds", help_heading = "Display Options")]
    pub list_rounds: bool,

    /// Update the API domain in config.
    #[arg(
        long = "set-api-domain",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode, mirroring info logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
