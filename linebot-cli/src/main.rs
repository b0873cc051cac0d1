//! linebot CLI - command-line interface for the Messaging API.
//!
//! Useful for scripting pushes, inspecting users and managing rich menu
//! images without writing any code.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use linebot_core::config::AppConfig;
use linebot_core::error::LbResult;
use linebot_core::logging;

/// linebot - Messaging API client.
#[derive(Parser)]
#[command(
    name = "linebot",
    version,
    about = "Messaging API command-line client",
    long_about = "A command-line interface for the Messaging API.\n\
                  Reads the channel access token from the config file unless --token is given."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Channel access token (overrides config).
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// API base address (overrides config).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Push text messages to a user, group or room.
    Push {
        /// Recipient ID.
        #[arg(long)]
        to: String,
        /// Message texts, one message each.
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Show a user's profile.
    Profile {
        /// User ID.
        user_id: String,
    },
    /// List follower user IDs.
    Followers {
        /// Page size.
        #[arg(short = 'n', long)]
        limit: Option<u32>,
        /// Continuation token from a previous page.
        #[arg(long)]
        start: Option<String>,
    },
    /// Show information about the bot account.
    BotInfo,
    /// Download the content of a received message.
    Content {
        /// Message ID.
        message_id: String,
        /// Output file.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Manage rich menus.
    RichMenu {
        #[command(subcommand)]
        action: commands::rich_menu::RichMenuAction,
    },
}

fn load_config(cli: &Cli) -> LbResult<AppConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_default()?,
    };
    if let Some(token) = &cli.token {
        config.api.channel_access_token = token.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> LbResult<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // An empty logging.directory means the platform data dir.
    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    let _guard = logging::init_logging(
        log_level,
        &config.effective_log_dir()?,
        config.logging.json_output,
    )?;

    debug!("linebot CLI v{}", linebot_core::constants::APP_VERSION);

    let api = commands::create_api_client(&config)?;

    match cli.command {
        Commands::Push { to, texts } => {
            commands::messages::push(&api, to, texts, cli.format).await
        }
        Commands::Content { message_id, output } => {
            commands::messages::download_content(&api, &message_id, &output).await
        }
        Commands::Profile { user_id } => {
            commands::users::profile(&api, &user_id, cli.format).await
        }
        Commands::Followers { limit, start } => {
            commands::users::followers(&api, limit, start.as_deref(), cli.format).await
        }
        Commands::BotInfo => commands::users::bot_info(&api, cli.format).await,
        Commands::RichMenu { action } => {
            commands::rich_menu::run(&api, action, cli.format).await
        }
    }
}
