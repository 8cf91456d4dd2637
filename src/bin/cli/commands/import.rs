use clap::Args;
use quotebook::{config, db, import, run_migrations};
use std::path::PathBuf;
use tracing::info;

use crate::output::{self, OutputConfig};

/// Loads `authors.json` and `quotes.json` straight into the database
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Authors export
    #[clap(long, default_value = "authors.json")]
    pub authors: PathBuf,
    /// Quotes export
    #[clap(long, default_value = "quotes.json")]
    pub quotes: PathBuf,
    /// Database to import into; defaults to the server's configured database
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Resolves the database URL the same way the server does
fn resolve_database_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    let config_dir = config::get_config_dir_path();
    let file_update = config::config_from_file(config_dir.as_ref().map(|dir| dir.join(config::CONFIG_FILE_NAME)))
        .unwrap_or_default();

    config::base_config(config_dir).apply_update(file_update).database_url
}

/// Runs the import against the local database
///
/// This does not go through the server.
pub fn execute(args: ImportArgs, config: &OutputConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database_url = resolve_database_url(args.database_url);
    info!("Importing into {}", database_url);

    let pool = db::init_pool(&database_url)?;
    {
        let mut conn = pool.get()?;
        run_migrations(&mut conn)?;
    }

    let summary = import::import_from_json(&pool, &args.authors, &args.quotes)?;
    output::print_import_summary(&summary, config);
    Ok(())
}
