// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing) on stderr, controlled by RUST_LOG
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Print results on stdout
// 5. Exit with proper code (0 = success, 1 = some pages failed, 2 = error)
// =============================================================================

mod analyze; // src/analyze/ - title, headings and keywords of a page
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - breadth-first crawling
mod document; // src/document.rs - parsed HTML pages
mod error; // src/error.rs - fetch and parse errors
mod extract; // src/extract/ - links and text from the HTML tree
mod fetch; // src/fetch/ - downloading pages

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use analyze::{ContentAnalyzer, Language, PageSignals, StopwordSet};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with --json output on stdout.
// Default level is "warn"; use e.g. RUST_LOG=crawl_signals=debug for more.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = success
//   Ok(1) = crawl finished but some pages could not be loaded
//   Err = the command could not run (bad options, page unreachable, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = cli.http.fetch_config();
    debug!(user_agent = %config.user_agent, timeout = ?config.timeout, "http client config");
    let fetcher = HttpFetcher::new(&config)?;

    match cli.command {
        Commands::Crawl { seed, max_depth, json } => {
            handle_crawl(&fetcher, &seed, max_depth, json).await
        }
        Commands::Signals {
            url,
            keywords,
            languages,
            json,
        } => handle_signals(&fetcher, &url, keywords, &languages, json).await,
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(fetcher: &HttpFetcher, seed: &str, max_depth: usize, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Crawling from: {}", seed);
        println!("📊 Max crawl depth: {}", max_depth);
    }

    let result = crawl::build_crawl_graph(fetcher, seed, max_depth).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("\n📄 Visited {} page(s):", result.visited.len());
        for (i, address) in result.visited.iter().enumerate() {
            println!("{:>5}. {}", i + 1, address);
        }
        print_failures(&result.failures);
    }

    if result.failures.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_failures(failures: &[crawl::PageFailure]) {
    if failures.is_empty() {
        println!("\n✅ Every fetched page loaded");
        return;
    }

    println!("\n❌ {} page(s) could not be loaded:", failures.len());
    println!("{:<60} {:<7} {:<30}", "URL", "DEPTH", "ERROR");
    println!("{}", "=".repeat(97));
    for failure in failures {
        println!(
            "{:<60} {:<7} {:<30}",
            truncate(&failure.address, 57),
            failure.depth,
            failure.error
        );
    }
}

// Handles the 'signals' subcommand
async fn handle_signals(
    fetcher: &HttpFetcher,
    url: &str,
    keyword_limit: usize,
    languages: &[Language],
    json: bool,
) -> Result<i32> {
    let stopwords = if languages.is_empty() {
        StopwordSet::default()
    } else {
        StopwordSet::for_languages(languages)
    };
    debug!(stopwords = stopwords.len(), ?languages, "stopword set ready");

    let analyzer = ContentAnalyzer::new(stopwords);
    let signals = analyze::extract_signals(fetcher, &analyzer, url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&signals)?);
    } else {
        print_signals(&signals, keyword_limit);
    }

    Ok(0)
}

fn print_signals(signals: &PageSignals, keyword_limit: usize) {
    println!("Title: {}", signals.title);

    println!("Headings ({}):", signals.headings.len());
    for heading in &signals.headings {
        println!("   - {}", heading);
    }

    let shown = keyword_limit.min(signals.keywords.len());
    println!(
        "Content keywords (first {} of {}): {}",
        shown,
        signals.keywords.len(),
        signals.keywords[..shown].join(", ")
    );
}

// Shortens long addresses so the table stays aligned
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
