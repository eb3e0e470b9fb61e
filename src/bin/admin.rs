//! CLI administration tool for mini-url.
//!
//! Inspects and manages links stored in PostgreSQL without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # A client's most recent links
//! cargo run --bin admin -- links list --client 4f1c2a...
//!
//! # One link
//! cargo run --bin admin -- links stats aB3_x9
//!
//! # Delete a link on behalf of its owner
//! cargo run --bin admin -- links delete aB3_x9
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)
//! - `BASE_URL` - used to print short URLs (default: `http://localhost:3000`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

use mini_url::application::services::QueryService;
use mini_url::config::{Config, mask_connection_string};
use mini_url::domain::entities::{OwnerToken, ShortLink, SortOrder};
use mini_url::domain::repositories::LinkRepository;
use mini_url::infrastructure::cache::NullCache;
use mini_url::infrastructure::persistence::PgLinkRepository;

/// CLI tool for managing mini-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and delete links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals across all links
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List links created by a client
    List {
        /// Client id the links belong to
        #[arg(short, long)]
        client: String,

        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        /// Show the oldest links first
        #[arg(long)]
        oldest: bool,
    },

    /// Show a single link
    Stats {
        code: String,
    },

    /// Delete a link on behalf of its owner
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let queries = QueryService::new(repo.clone(), Arc::new(NullCache::new()), base_url.as_str());

    match action {
        LinkAction::List {
            client,
            limit,
            oldest,
        } => list_links(repo, &base_url, &client, limit, oldest).await?,
        LinkAction::Stats { code } => show_link(&queries, &code).await?,
        LinkAction::Delete { code, yes } => delete_link(&queries, &code, yes).await?,
    }

    Ok(())
}

/// Lists a client's links.
///
/// # Output Format
///
/// ```text
/// Links of 4f1c2a...
///
///   Code     Clicks   Created            Long URL
///   ──────────────────────────────────────────────────────────────
///   aB3_x9   12       2025-01-15 10:30   https://example.com/page
/// ```
async fn list_links(
    repo: Arc<PgLinkRepository>,
    base_url: &str,
    client: &str,
    limit: i64,
    oldest: bool,
) -> Result<()> {
    let owner = OwnerToken::parse(client).context("Client id must not be empty")?;
    let order = if oldest {
        SortOrder::OldestFirst
    } else {
        SortOrder::NewestFirst
    };

    println!("{} {}", "Links of".bright_blue().bold(), owner.as_str().cyan());
    println!();

    let links = repo
        .find_by_client(&owner, limit, order)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<8} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!(
        "  Total: {}   Short URLs: {}/<code>",
        links.len().to_string().bright_white().bold(),
        base_url.trim_end_matches('/')
    );
    println!();

    Ok(())
}

fn print_link(short: &ShortLink) {
    let link = &short.link;
    println!("  Code:      {}", link.code.cyan());
    println!("  Short URL: {}", short.short_url.bright_yellow());
    println!("  Long URL:  {}", link.long_url);
    println!("  Owner:     {}", link.owner.as_str().bright_black());
    println!(
        "  Clicks:    {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:   {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Updated:   {}",
        link.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

async fn show_link(queries: &QueryService<PgLinkRepository>, code: &str) -> Result<()> {
    let short = queries
        .get_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "Link".bright_blue().bold());
    println!();
    print_link(&short);
    println!();

    Ok(())
}

/// Deletes a link after confirmation, acting as its recorded owner.
///
/// Cached redirect targets in Redis expire on their own; a redirect for a
/// deleted code also drops the stale entry.
async fn delete_link(
    queries: &QueryService<PgLinkRepository>,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    let short = queries
        .get_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "Delete link".bright_blue().bold());
    println!();
    print_link(&short);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    queries
        .delete_link(code, short.link.owner.as_str())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays totals: links, clicks and distinct clients.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let (links, clicks, clients): (i64, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(clicks), 0)::BIGINT, COUNT(DISTINCT client_id) FROM links",
    )
    .fetch_one(pool)
    .await?;

    println!("  Links:   {}", links.to_string().bright_green().bold());
    println!("  Clicks:  {}", clicks.to_string().bright_green().bold());
    println!("  Clients: {}", clients.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let size: String =
                sqlx::query_scalar("SELECT pg_size_pretty(pg_database_size(current_database()))")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Size:       {}", size.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
