use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rusqlite::Connection;
use tracing::info;

use adlens::analysis::compare::compare;
use adlens::analysis::copygate::{select_copies, TONE_ALL};
use adlens::analysis::narrative::narrate;
use adlens::analysis::platforms::classify;
use adlens::carousel::Carousel;
use adlens::config::Config;
use adlens::model::AdAnalysisRecord;
use adlens::source::http::ScoringApiClient;
use adlens::source::{fetch_pair, RecordSource};

/// Adlens: side-by-side comparison for AI-scored ad creatives.
///
/// Fetches analysis records from the scoring API, caches them locally, and
/// derives winners, difference narratives, platform fit, and tier-gated
/// copy listings.
#[derive(Parser)]
#[command(name = "adlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the local record cache
    Init,

    /// Fetch two analysis records from the scoring API and cache them
    Fetch {
        /// First record id
        id_a: String,
        /// Second record id
        id_b: String,
    },

    /// Compare two cached records side by side
    Compare {
        /// First record id (wins ties)
        id_a: String,
        /// Second record id
        id_b: String,

        /// Re-fetch both records from the API before comparing
        #[arg(long)]
        refresh: bool,

        /// Also write a markdown report file
        #[arg(long)]
        report: bool,
    },

    /// Show one record's scores, platform fit, and images
    Show {
        /// Record id
        id: String,
    },

    /// List a record's tier-gated ad-copy variants
    Copies {
        /// Record id
        id: String,

        /// Filter variants by tone (substring match; default: all)
        #[arg(long, default_value = TONE_ALL)]
        tone: String,

        /// Act as a paid-tier account (overrides ADLENS_TIER)
        #[arg(long)]
        paid: bool,
    },

    /// List cached records ranked by overall score
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("adlens=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let config = Config::load()?;
            let conn = adlens::db::initialize(&config.db_path)?;
            let tables = adlens::db::schema::table_count(&conn)?;
            println!("Cache initialized at: {}", config.db_path);
            println!("Tables created: {tables}");
            println!("\nNext: set ADLENS_API_URL in .env, then run `adlens fetch <id> <id>`.");
        }

        Commands::Fetch { id_a, id_b } => {
            let config = Config::load()?;
            config.require_api()?;
            let conn = adlens::db::initialize(&config.db_path)?;
            let client = ScoringApiClient::new(&config.api_url)?;

            println!("Fetching {id_a} and {id_b}...");
            let (a, b) = fetch_pair(&client, &id_a, &id_b).await?;

            adlens::db::queries::upsert_record(&conn, &a)?;
            adlens::db::queries::upsert_record(&conn, &b)?;
            info!(id_a = %a.id, id_b = %b.id, "records cached");

            for record in [&a, &b] {
                println!(
                    "  {} {} — overall {}/100",
                    "✓".green(),
                    record.display_name(),
                    record.overall_score
                );
            }
        }

        Commands::Compare {
            id_a,
            id_b,
            refresh,
            report,
        } => {
            let config = Config::load()?;
            let conn = adlens::db::initialize(&config.db_path)?;

            let a = resolve_record(&conn, &config, &id_a, refresh).await?;
            let b = resolve_record(&conn, &config, &id_b, refresh).await?;

            let result = compare(&a, &b);
            let narrative = narrate(&result, &a, &b);
            adlens::output::terminal::display_comparison(&result, &narrative, &a, &b);

            if report {
                let path = adlens::output::report::generate_report(
                    &result,
                    &narrative,
                    &a,
                    &b,
                    "output/adlens-report.md",
                )?;
                println!("\n{}", format!("Markdown report saved to: {path}").bold());
            }
        }

        Commands::Show { id } => {
            let config = Config::load()?;
            let conn = adlens::db::open(&config.db_path)?;

            let record = require_cached(&conn, &id)?;
            let fits = classify(&record);
            let carousel = Carousel::new(record.images.len());
            adlens::output::terminal::display_record_detail(&record, &fits, Some(&carousel));
        }

        Commands::Copies { id, tone, paid } => {
            let config = Config::load()?;
            let conn = adlens::db::open(&config.db_path)?;

            let record = require_cached(&conn, &id)?;
            let paid_tier = paid || config.paid_tier;
            let copies = select_copies(&record, paid_tier, &tone);
            adlens::output::terminal::display_copies(&copies, paid_tier, &tone);
        }

        Commands::List => {
            let config = Config::load()?;
            let conn = adlens::db::open(&config.db_path)?;

            let records = adlens::db::queries::list_records(&conn)?;
            if records.is_empty() {
                println!("No cached records. Run `adlens fetch <id> <id>` first.");
                return Ok(());
            }

            println!(
                "\n{}",
                format!("=== Cached records ({}) ===", records.len()).bold()
            );
            println!(
                "  {:<20} {:<28} {:>8}  {}",
                "Id".dimmed(),
                "Name".dimmed(),
                "Overall".dimmed(),
                "Fetched".dimmed(),
            );
            for summary in &records {
                let name = if summary.name.is_empty() {
                    "-".to_string()
                } else {
                    summary.name.clone()
                };
                println!(
                    "  {:<20} {:<28} {:>8}  {}",
                    summary.id,
                    name,
                    summary.overall_score,
                    summary.fetched_at.dimmed(),
                );
            }
        }
    }

    Ok(())
}

/// Load a record from the cache, fetching from the API on miss (or always,
/// with `refresh`) when configured.
///
/// Comparison never runs against a stand-in: if the record can't be
/// resolved from either place, this fails and the comparison is withheld.
async fn resolve_record(
    conn: &Connection,
    config: &Config,
    id: &str,
    refresh: bool,
) -> Result<AdAnalysisRecord> {
    if !refresh {
        if let Some(record) = adlens::db::queries::get_record(conn, id)? {
            return Ok(record);
        }
    }

    if config.api_url.is_empty() {
        anyhow::bail!(
            "Comparison unavailable: record {id} is not cached and ADLENS_API_URL is not set.\n\
             Run `adlens fetch` with the API configured first."
        );
    }

    info!(id = %id, "cache miss, fetching from scoring API");
    let client = ScoringApiClient::new(&config.api_url)?;
    let record = client.fetch_record(id).await?;
    adlens::db::queries::upsert_record(conn, &record)?;
    Ok(record)
}

/// Load a record from the cache, failing with a pointer to `fetch` if absent.
fn require_cached(conn: &Connection, id: &str) -> Result<AdAnalysisRecord> {
    match adlens::db::queries::get_record(conn, id)? {
        Some(record) => Ok(record),
        None => anyhow::bail!("Record {id} is not cached. Run `adlens fetch` first."),
    }
}
