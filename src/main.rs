// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, RUST_LOG aware)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with a code that tells the operator what went wrong:
//    0 = success, 2 = article not found, 3 = fetch failure,
//    4 = page/file parse failure, 5 = invalid argument,
//    6 = empty word-count store, 7 = corrupt word-count store, 8 = I/O
// =============================================================================

// Module declarations - only the CLI-facing parts live in the binary;
// everything else comes from the wiki_scraper library (src/lib.rs)
mod cli; // src/cli.rs - command-line parsing
mod output; // src/output.rs - printing results

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use wiki_scraper::analysis::{compute_relative_frequency, sort_rows, LanguageReference, SortMode};
use wiki_scraper::config::Config;
use wiki_scraper::crawl::{count_page_words, CrawlOptions, WikiCrawler};
use wiki_scraper::error::ScraperError;
use wiki_scraper::fetch::{HtmlFileSource, PageFetcher, PageSource};
use wiki_scraper::words::{FrequencyStore, Tokenizer};
use wiki_scraper::{parser, table};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = cli.config();

    match cli.command {
        Commands::Summary { search_phrase, html_file } => {
            handle_summary(&config, &search_phrase, html_file).await
        }
        Commands::Table {
            search_phrase,
            number,
            first_row_is_header,
            html_file,
            json,
        } => handle_table(&config, &search_phrase, number, first_row_is_header, html_file, json).await,
        Commands::CountWords { search_phrase, html_file } => {
            handle_count_words(&config, &search_phrase, html_file).await
        }
        Commands::Analyze {
            mode,
            n,
            language_file,
            vocabulary,
            json,
        } => handle_analyze(&config, &mode, n, &language_file, vocabulary, json),
        Commands::AutoCountWords {
            search_phrase,
            depth,
            wait,
            max_pages,
            html_file,
            json,
        } => handle_auto_count_words(&config, &search_phrase, depth, wait, max_pages, html_file, json).await,
    }
}

// Handles the 'summary' subcommand
async fn handle_summary(config: &Config, phrase: &str, html_file: Option<PathBuf>) -> Result<i32> {
    let source = page_source(config, phrase, html_file)?;
    let page = source.fetch_document(phrase).await?;

    let paragraph = parser::extract_first_paragraph(&page.html).context("failed to parse summary")?;
    output::print_summary(&paragraph, &page.final_url);
    Ok(0)
}

// Handles the 'table' subcommand
async fn handle_table(
    config: &Config,
    phrase: &str,
    number: usize,
    first_row_is_header: bool,
    html_file: Option<PathBuf>,
    json: bool,
) -> Result<i32> {
    let source = page_source(config, phrase, html_file)?;
    let page = source.fetch_document(phrase).await?;

    let raw = parser::extract_nth_table(&page.html, number)?;
    let processed = table::process_table(&raw.rows, first_row_is_header)?;

    let csv_path = PathBuf::from(format!("{}.csv", table::sanitize_filename(phrase)));
    table::write_table_csv(&csv_path, &processed)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    info!(path = %csv_path.display(), rows = processed.rows.len(), "saved table");

    output::print_value_counts(&processed, json)?;
    Ok(0)
}

// Handles the 'count-words' subcommand: the single-page pipeline
async fn handle_count_words(config: &Config, phrase: &str, html_file: Option<PathBuf>) -> Result<i32> {
    let source = page_source(config, phrase, html_file)?;
    let tokenizer = Tokenizer::new()?;

    let page = count_page_words(source.as_ref(), &tokenizer, phrase, &config.counts_path).await?;

    println!(
        "✅ Added {} token(s) from {} to {}",
        page.tokens_added,
        page.final_url,
        config.counts_path.display()
    );
    Ok(0)
}

// Handles the 'analyze' subcommand
fn handle_analyze(
    config: &Config,
    mode: &str,
    n: usize,
    language_file: &Path,
    vocabulary: usize,
    json: bool,
) -> Result<i32> {
    // Validate the mode before touching any file
    let mode: SortMode = mode.parse()?;

    let store = FrequencyStore::load(&config.counts_path)?;
    let reference = LanguageReference::from_json_file(language_file, vocabulary)
        .with_context(|| format!("failed to load language reference {}", language_file.display()))?;
    if reference.is_empty() {
        warn!(path = %language_file.display(), "language reference has no usable entries");
    }
    info!(words = store.len(), reference = reference.len(), "comparing word frequencies");

    let mut rows = compute_relative_frequency(&store, &reference, n)?;
    sort_rows(&mut rows, mode);

    output::print_relative_rows(&rows, mode, json)?;
    Ok(0)
}

// Handles the 'auto-count-words' subcommand: the breadth-first crawl
async fn handle_auto_count_words(
    config: &Config,
    phrase: &str,
    depth: usize,
    wait: f64,
    max_pages: usize,
    html_file: Option<PathBuf>,
    json: bool,
) -> Result<i32> {
    let options = CrawlOptions {
        max_depth: depth,
        wait: wait_duration(wait)?,
        max_pages,
    };

    info!(
        "crawling from {} (max depth {}, max pages {}, wait {:?})",
        phrase, options.max_depth, options.max_pages, options.wait
    );

    let source = page_source(config, phrase, html_file)?;
    let crawler = WikiCrawler::new(source.as_ref())?;
    let stats = crawler
        .auto_count_words(phrase, &options, &config.counts_path)
        .await?;

    output::print_crawl_stats(&stats, json)?;
    Ok(0)
}

// Picks where article HTML comes from: a saved file (offline) or the wiki
fn page_source(config: &Config, phrase: &str, html_file: Option<PathBuf>) -> Result<Box<dyn PageSource>> {
    let source: Box<dyn PageSource> = match html_file {
        Some(path) => Box::new(HtmlFileSource::new(phrase, path)),
        None => Box::new(PageFetcher::new(config)?),
    };
    Ok(source)
}

// Turns --wait seconds into a Duration, rejecting negative or NaN values
fn wait_duration(seconds: f64) -> std::result::Result<Duration, ScraperError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ScraperError::InvalidArgument(format!(
            "--wait must be a non-negative number of seconds, got {}",
            seconds
        )));
    }
    Ok(Duration::from_secs_f64(seconds))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "wiki_scraper=debug" } else { "wiki_scraper=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Maps an error to the process exit code; unknown errors get 1
fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ScraperError>()
        .map_or(1, ScraperError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_duration() {
        assert_eq!(wait_duration(0.0).unwrap(), Duration::ZERO);
        assert_eq!(wait_duration(1.5).unwrap(), Duration::from_millis(1500));
        assert!(wait_duration(-1.0).is_err());
        assert!(wait_duration(f64::NAN).is_err());
    }

    #[test]
    fn test_exit_code_for_wrapped_errors() {
        let err = anyhow::Error::new(ScraperError::EmptyStore).context("while analyzing");
        assert_eq!(exit_code_for(&err), 6);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[tokio::test]
    async fn test_offline_count_words_updates_store() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("pikachu.html");
        std::fs::write(
            &html_path,
            r#"<div id="mw-content-text"><p>Pikachu is an Electric-type Pokémon.</p></div>"#,
        )
        .unwrap();

        let config = Config {
            counts_path: dir.path().join("word-counts.json"),
            ..Config::default()
        };
        let code = handle_count_words(&config, "Pikachu", Some(html_path)).await.unwrap();
        assert_eq!(code, 0);

        let store = FrequencyStore::load(&config.counts_path).unwrap();
        assert_eq!(store.get("pokémon"), Some(1));
        assert_eq!(store.get("an"), Some(1));
    }

    #[tokio::test]
    async fn test_offline_crawl_stops_after_start_page() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("pikachu.html");
        std::fs::write(
            &html_path,
            r#"<div id="mw-content-text"><p>Pikachu <a href="/wiki/Raichu">evolves</a>.</p></div>"#,
        )
        .unwrap();

        let config = Config {
            counts_path: dir.path().join("word-counts.json"),
            ..Config::default()
        };
        let code = handle_auto_count_words(&config, "Pikachu", 3, 0.0, 10, Some(html_path), true)
            .await
            .unwrap();
        assert_eq!(code, 0);

        let store = FrequencyStore::load(&config.counts_path).unwrap();
        assert_eq!(store.get("evolves"), Some(1));
    }

    #[test]
    fn test_analyze_unknown_mode_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            counts_path: dir.path().join("word-counts.json"),
            ..Config::default()
        };

        let err = handle_analyze(&config, "zipf", 10, &dir.path().join("en.json"), 10, false).unwrap_err();
        assert_eq!(exit_code_for(&err), 5);
    }

    #[test]
    fn test_analyze_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let language_file = dir.path().join("en.json");
        std::fs::write(&language_file, r#"{"the": 7.7}"#).unwrap();
        let config = Config {
            counts_path: dir.path().join("word-counts.json"),
            ..Config::default()
        };

        let err = handle_analyze(&config, "article", 10, &language_file, 10, false).unwrap_err();
        assert_eq!(exit_code_for(&err), 6);
    }
}
