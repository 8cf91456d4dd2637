use clap::Subcommand;
use quotebook::dto::CreateQuoteDto;

use crate::client::QuotebookClient;
use crate::output::{self, OutputConfig};

/// Quote listing commands
#[derive(Subcommand, Debug)]
pub enum QuotesCommands {
    /// List all quotes
    List {
        /// Page to show; out-of-range pages are clamped
        #[clap(long, default_value_t = 1)]
        page: i64,
    },
    /// List the quotes carrying a tag
    Tag {
        /// Exact tag name
        name: String,
        #[clap(long, default_value_t = 1)]
        page: i64,
    },
    /// Search by tag prefix or author name pattern
    Search {
        /// Search term
        query: String,
        #[clap(long, default_value_t = 1)]
        page: i64,
    },
}

/// Quote management commands
#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Create a new quote
    Create {
        /// The quoted text
        #[clap(long)]
        quote: String,
        /// ID of the author
        #[clap(long)]
        author_id: i32,
        /// Tag IDs to attach (repeatable)
        #[clap(long = "tag")]
        tags: Vec<i32>,
    },
}

/// Executes a quote listing command
pub async fn execute_listing(
    client: &QuotebookClient,
    cmd: QuotesCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        QuotesCommands::List { page } => {
            let listing = client.list_quotes(page).await?;
            output::print_filtered_listing(&listing, &listing, "All quotes", config);
        }
        QuotesCommands::Tag { name, page } => {
            let listing = client.quotes_by_tag(&name, page).await?;
            let heading = format!("Quotes tagged {:?}", listing.tag_name);
            output::print_filtered_listing(&listing, &listing.listing, &heading, config);
        }
        QuotesCommands::Search { query, page } => {
            let listing = client.search(&query, page).await?;
            let heading = format!("Search results for {:?}", listing.data);
            output::print_filtered_listing(&listing, &listing.listing, &heading, config);
        }
    }
    Ok(())
}

/// Executes a quote command
pub async fn execute(
    client: &QuotebookClient,
    cmd: QuoteCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        QuoteCommands::Create { quote, author_id, tags } => {
            let dto = CreateQuoteDto { quote, author_id, tags };
            let created = client.create_quote(&dto).await?;
            output::print_quote(&created, config);
        }
    }
    Ok(())
}
