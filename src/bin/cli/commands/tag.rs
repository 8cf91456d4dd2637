use clap::Subcommand;

use crate::client::QuotebookClient;
use crate::output::{self, OutputConfig};

/// Tag management commands
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List all tags
    List,
    /// Create a new tag, or show the existing one with that name
    Create {
        /// Name of the tag (3 to 25 characters)
        #[clap(long)]
        name: String,
    },
    /// Show the most used tags
    Top,
}

/// Executes a tag command
pub async fn execute(
    client: &QuotebookClient,
    cmd: TagCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        TagCommands::List => {
            let tags = client.list_tags().await?;
            output::print_tags(&tags, config);
        }
        TagCommands::Create { name } => {
            let tag = client.create_tag(name).await?;
            output::print_tag(&tag, config);
        }
        TagCommands::Top => {
            let ranking = client.top_tags().await?;
            output::print_top_tags(&ranking, config);
        }
    }
    Ok(())
}
