use clap::ValueEnum;
use quotebook::dto::{AuthorDetail, DeletedAuthorDto, QuoteListing, QuoteView};
use quotebook::import::ImportSummary;
use quotebook::models::{Author, Tag, TagCount};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just IDs or counts)
    pub quiet: bool,
}

/// Prints any serializable value as pretty JSON
fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

fn print_quote_line(quote: &QuoteView) {
    println!("{:>4}  \u{201c}{}\u{201d}", quote.id, quote.quote);
    if quote.tags.is_empty() {
        println!("      by {}", quote.author);
    } else {
        println!("      by {}  [{}]", quote.author, quote.tags.join(", "));
    }
}

/// Prints a page of quotes and the tag ranking
///
/// `heading` names the filter that produced the listing, if any.
pub fn print_listing(listing: &QuoteListing, heading: Option<&str>, config: &OutputConfig) {
    let page = &listing.quotes;
    if config.quiet {
        for quote in &page.items {
            println!("{}", quote.id);
        }
        return;
    }

    if let Some(heading) = heading {
        println!("{}", heading);
        println!();
    }
    if page.items.is_empty() {
        println!("No quotes found.");
    }
    for quote in &page.items {
        print_quote_line(quote);
    }
    println!();
    println!(
        "Page {} of {} ({} quotes){}{}",
        page.page_number,
        page.total_pages,
        page.total_items,
        if page.has_prev { "  <prev" } else { "" },
        if page.has_next { "  next>" } else { "" },
    );
    if !listing.top_tags.is_empty() {
        let ranking: Vec<String> = listing
            .top_tags
            .iter()
            .map(|t| format!("{} ({})", t.name, t.quote_count))
            .collect();
        println!("Top tags: {}", ranking.join(", "));
    }
}

/// Prints a listing together with its filter in the specified format
pub fn print_filtered_listing<T: Serialize>(full: &T, listing: &QuoteListing, heading: &str, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => print_listing(listing, Some(heading), config),
        OutputFormat::Json => print_json(full),
    }
}

/// Prints a single quote in the specified format
pub fn print_quote(quote: &QuoteView, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", quote.id);
                return;
            }
            print_quote_line(quote);
        }
        OutputFormat::Json => print_json(quote),
    }
}

/// Prints a single author in the specified format
pub fn print_author(author: &Author, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", author.get_id());
                return;
            }
            println!("ID:          {}", author.get_id());
            println!("Name:        {}", author.get_fullname());
            println!("Born:        {}", author.get_born_date().format("%B %d, %Y"));
            println!("Location:    {}", author.get_born_location());
            println!("Description: {}", author.get_description());
        }
        OutputFormat::Json => print_json(author),
    }
}

/// Prints an author with their quotes
pub fn print_author_detail(detail: &AuthorDetail, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            print_author(&detail.author, config);
            if config.quiet {
                return;
            }
            println!();
            println!("Quotes ({}):", detail.quotes.len());
            for quote in &detail.quotes {
                print_quote_line(quote);
            }
        }
        OutputFormat::Json => print_json(detail),
    }
}

/// Prints a list of authors in the specified format
pub fn print_authors(authors: &[Author], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if authors.is_empty() {
                if !config.quiet {
                    println!("No authors found.");
                }
                return;
            }
            if config.quiet {
                for author in authors {
                    println!("{}", author.get_id());
                }
                return;
            }
            let max_id = authors.iter().map(|a| a.get_id().to_string().len()).max().unwrap_or(2).max(2);
            println!("{:<id_w$}  NAME", "ID", id_w = max_id);
            for author in authors {
                println!("{:<id_w$}  {}", author.get_id(), author.get_fullname(), id_w = max_id);
            }
        }
        OutputFormat::Json => print_json(authors),
    }
}

/// Prints the result of an author deletion
pub fn print_deleted_author(deleted: &DeletedAuthorDto, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", deleted.deleted_quotes);
                return;
            }
            println!("Deleted {} and {} quotes", deleted.fullname, deleted.deleted_quotes);
        }
        OutputFormat::Json => print_json(deleted),
    }
}

/// Prints a single tag in the specified format
pub fn print_tag(tag: &Tag, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", tag.get_id());
                return;
            }
            println!("ID:   {}", tag.get_id());
            println!("Name: {}", tag.get_name());
        }
        OutputFormat::Json => print_json(tag),
    }
}

/// Prints a list of tags in the specified format
pub fn print_tags(tags: &[Tag], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                if !config.quiet {
                    println!("No tags found.");
                }
                return;
            }
            if config.quiet {
                for tag in tags {
                    println!("{}", tag.get_id());
                }
                return;
            }
            let max_id = tags.iter().map(|t| t.get_id().to_string().len()).max().unwrap_or(2).max(2);
            println!("{:<id_w$}  NAME", "ID", id_w = max_id);
            for tag in tags {
                println!("{:<id_w$}  {}", tag.get_id(), tag.get_name(), id_w = max_id);
            }
        }
        OutputFormat::Json => print_json(tags),
    }
}

/// Prints the tag ranking in the specified format
pub fn print_top_tags(ranking: &[TagCount], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if ranking.is_empty() {
                if !config.quiet {
                    println!("No tags found.");
                }
                return;
            }
            let max_name = ranking.iter().map(|t| t.name.chars().count()).max().unwrap_or(4).max(4);
            if !config.quiet {
                println!("{:<name_w$}  QUOTES", "NAME", name_w = max_name);
            }
            for entry in ranking {
                println!("{:<name_w$}  {}", entry.name, entry.quote_count, name_w = max_name);
            }
        }
        OutputFormat::Json => print_json(ranking),
    }
}

/// Prints the outcome of an import run
pub fn print_import_summary(summary: &ImportSummary, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", summary.quotes_created);
                return;
            }
            println!("Authors created: {} (skipped {})", summary.authors_created, summary.authors_skipped);
            println!("Quotes created:  {} (skipped {})", summary.quotes_created, summary.quotes_skipped);
            println!("Tags created:    {}", summary.tags_created);
        }
        OutputFormat::Json => print_json(summary),
    }
}
