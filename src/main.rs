//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use dota_scrape::{
    cli::{Commands, DotaScrape},
    commands::{
        handle_crawl, handle_participants, handle_report, handle_rosters, handle_teams,
        CommandContext,
    },
    core::resolve_database_path,
    storage::TeamDatabase,
};

fn init_logger(verbose: bool) {
    let filters = match std::env::var("RUST_LOG") {
        Ok(filters) => filters,
        Err(_) if verbose => "debug".to_string(),
        Err(_) => "info".to_string(),
    };
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

/// Run the CLI.
///
/// Per-team and per-player failures are logged by the scrapers and never
/// change the exit status; only setup failures do.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DotaScrape::parse();
    init_logger(app.options.verbose);

    let db_path = resolve_database_path(app.options.db.clone())?;
    let config = app.options.session_config();

    match app.command {
        Commands::Participants { tournament } => {
            let mut ctx = CommandContext::open(&db_path, config)
                .with_context(|| format!("opening {}", db_path.display()))?;
            let summary = handle_participants(&mut ctx, &tournament).await;
            println!("✓ Participants of {}: {}", tournament, summary);
        }

        Commands::Rosters => {
            let mut ctx = CommandContext::open(&db_path, config)
                .with_context(|| format!("opening {}", db_path.display()))?;
            let summary = handle_rosters(&mut ctx).await;
            println!("✓ Rosters: {}", summary);
        }

        Commands::Crawl { tournament } => {
            let mut ctx = CommandContext::open(&db_path, config)
                .with_context(|| format!("opening {}", db_path.display()))?;
            let (participants, rosters) = handle_crawl(&mut ctx, &tournament).await;
            println!("✓ Participants of {}: {}", tournament, participants);
            println!("✓ Rosters: {}", rosters);
        }

        Commands::Teams { json } => {
            let db = TeamDatabase::open(&db_path)
                .with_context(|| format!("opening {}", db_path.display()))?;
            handle_teams(&db, json)?;
        }

        Commands::Report {
            team,
            position,
            json,
        } => {
            let db = TeamDatabase::open(&db_path)
                .with_context(|| format!("opening {}", db_path.display()))?;
            handle_report(&db, &team, position, json)?;
        }
    }

    Ok(())
}
