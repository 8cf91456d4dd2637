use chrono::NaiveDate;
use clap::Subcommand;
use quotebook::dto::CreateAuthorDto;

use crate::client::QuotebookClient;
use crate::output::{self, OutputConfig};

/// Author management commands
#[derive(Subcommand, Debug)]
pub enum AuthorCommands {
    /// List all authors
    List,
    /// Show an author and their quotes
    Show {
        /// Exact full name
        fullname: String,
    },
    /// Create a new author
    Create {
        /// Full name, unique across authors
        #[clap(long)]
        fullname: String,
        /// Birth date as YYYY-MM-DD; defaults to today
        #[clap(long)]
        born_date: Option<NaiveDate>,
        /// Place of birth
        #[clap(long)]
        born_location: String,
        /// Short biography
        #[clap(long)]
        description: String,
    },
    /// Delete an author together with all of their quotes
    Delete {
        /// Exact full name
        fullname: String,
    },
}

/// Executes an author command
pub async fn execute(
    client: &QuotebookClient,
    cmd: AuthorCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        AuthorCommands::List => {
            let authors = client.list_authors().await?;
            output::print_authors(&authors, config);
        }
        AuthorCommands::Show { fullname } => {
            let detail = client.get_author(&fullname).await?;
            output::print_author_detail(&detail, config);
        }
        AuthorCommands::Create { fullname, born_date, born_location, description } => {
            let dto = CreateAuthorDto { fullname, born_date, born_location, description };
            let author = client.create_author(&dto).await?;
            output::print_author(&author, config);
        }
        AuthorCommands::Delete { fullname } => {
            let deleted = client.delete_author(&fullname).await?;
            output::print_deleted_author(&deleted, config);
        }
    }
    Ok(())
}
