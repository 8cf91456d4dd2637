mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::QuotebookClient;
use quotebook::config;
use output::{OutputConfig, OutputFormat};
use std::process;

/// CLI for the Quotebook server
#[derive(Parser, Debug)]
#[clap(name = "quotebook-cli", about = "CLI for the Quotebook quote catalogue")]
struct Cli {
    /// Server URL to connect to
    #[clap(
        long,
        env = "QUOTEBOOK_URL",
        global = true
    )]
    server_url: Option<String>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just IDs or counts)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse quotes
    #[command(subcommand)]
    Quotes(commands::quote::QuotesCommands),
    /// Manage quotes
    #[command(subcommand)]
    Quote(commands::quote::QuoteCommands),
    /// Manage authors
    #[command(subcommand)]
    Author(commands::author::AuthorCommands),
    /// Manage tags
    #[command(subcommand)]
    Tag(commands::tag::TagCommands),
    /// Import authors and quotes from JSON exports into the local database
    Import(commands::import::ImportArgs),
}

/// Resolves the server URL from CLI args, config file, or defaults
///
/// Precedence: CLI flag / env var > config file > default
fn resolve_server_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    let config_dir = config::get_config_dir_path();
    if let Some(ref dir) = config_dir {
        let config_path = dir.join(config::CONFIG_FILE_NAME);
        if let Ok(update) = config::config_from_file(Some(config_path)) {
            if let Some(url) = update.server_url {
                return url;
            }
        }
    }

    "http://localhost:3000".to_string()
}

/// Formats an error for human-readable stderr output
fn format_error(err: &dyn std::error::Error) -> String {
    let err_string = err.to_string();

    // ClientError::Request wraps reqwest errors; check for connection issues
    if err_string.contains("error sending request")
        || err_string.contains("connection refused")
        || err_string.contains("Connection refused")
        || err_string.contains("tcp connect error")
    {
        return format!(
            "Could not connect to server. Is quotebook running?\n  {}",
            err_string
        );
    }

    err_string
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    let client = QuotebookClient::new(resolve_server_url(cli.server_url));

    let result = match cli.command {
        Commands::Quotes(cmd) => {
            commands::quote::execute_listing(&client, cmd, &output_config).await
        }
        Commands::Quote(cmd) => commands::quote::execute(&client, cmd, &output_config).await,
        Commands::Author(cmd) => commands::author::execute(&client, cmd, &output_config).await,
        Commands::Tag(cmd) => commands::tag::execute(&client, cmd, &output_config).await,
        Commands::Import(args) => commands::import::execute(args, &output_config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(e.as_ref()));
        process::exit(1);
    }
}
