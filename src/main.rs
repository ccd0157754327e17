// src/main.rs
//
// moviehub command line front end.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviehub::db::{get_connection, get_database_stats, verify_database_integrity};
use moviehub::{AppConfig, AppState, MovieDetail, MovieSummary};

#[derive(Parser)]
#[command(name = "moviehub", version, about = "Offline-first now-playing movie catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List now-playing movies, served from the local cache when possible
    List {
        /// First page to load
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Number of consecutive pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show the details of one movie
    Detail { id: i64 },
    /// Mark or unmark a cached movie as favorite
    Favorite {
        id: i64,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Cache and database statistics
    Stats,
    /// Delete every cached movie
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env().context("loading configuration")?;
    let state = AppState::build(&config).context("initializing moviehub")?;

    match cli.command {
        Command::List { page, pages } => {
            if page == 0 {
                bail!("pages start at 1");
            }
            for current in page..page.saturating_add(pages) {
                let movies = state.movies.get_movies_list(current).await?;
                if movies.is_empty() {
                    println!("page {}: no movies", current);
                    break;
                }
                println!("page {}:", current);
                for movie in &movies {
                    print_summary(movie);
                }
            }
        }
        Command::Detail { id } => {
            let detail = state.movie_details.get_movie_detail(id).await?;
            if detail.is_empty() {
                bail!("movie {} is not cached and could not be fetched", id);
            }
            print_detail(&detail);
        }
        Command::Favorite { id, value } => {
            if !state.movies.update_favorite(id, value)? {
                bail!("movie {} is not cached; list or open it first", id);
            }
            println!("movie {} favorite = {}", id, value);
        }
        Command::Stats => {
            let cache = state.cache.stats()?;
            let conn = get_connection(&state.pool)?;
            verify_database_integrity(&conn)?;
            let db = get_database_stats(&conn)?;

            println!("database:        {}", config.db_path.display());
            println!("size:            {} bytes ({} pages)", db.size_bytes, db.page_count);
            println!("summary rows:    {} ({} favorite)", cache.summary_rows, cache.favorite_summary_rows);
            println!("detail rows:     {} ({} favorite)", cache.detail_rows, cache.favorite_detail_rows);
        }
        Command::Reset => {
            state.cache.clear()?;
            println!("cache cleared");
        }
    }

    Ok(())
}

fn print_summary(movie: &MovieSummary) {
    println!(
        "  {}{:>8}  {:<40}  {:<10}  {:.1}",
        if movie.is_favorite { '*' } else { ' ' },
        movie.id,
        movie.title,
        movie.release_date,
        movie.vote_average
    );
}

fn print_detail(detail: &MovieDetail) {
    println!("{} ({})", detail.title, detail.id);
    println!("released:  {}", detail.release_date);
    println!("runtime:   {} min", detail.runtime);
    println!("rating:    {:.1}", detail.vote_average);
    println!("genres:    {}", detail.genre_names());
    println!("favorite:  {}", if detail.is_favorite { "yes" } else { "no" });
    if let Some(url) = detail.poster_url() {
        println!("poster:    {}", url);
    }
    if !detail.overview.is_empty() {
        println!();
        println!("{}", detail.overview);
    }
}
