// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI structure is described with Rust structs
// and attributes, and clap generates the parsing and the --help text.
//
// Subcommands:
// - crawl: breadth-first crawl from a seed page
// - signals: title, headings and keywords of a single page
// =============================================================================

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::analyze::Language;
use crate::fetch::FetchConfig;

#[derive(Parser, Debug)]
#[command(
    name = "crawl-signals",
    version,
    about = "Crawl a site breadth-first and extract titles, headings and keywords",
    long_about = "crawl-signals follows https links outward from a seed page, level by level, \
                  and lists every page it visits. It can also report the title, headings and \
                  keywords of a single page."
)]
pub struct Cli {
    #[command(flatten)]
    pub http: HttpArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options for the HTTP client, shared by every subcommand.
#[derive(Args, Debug)]
pub struct HttpArgs {
    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,
}

impl HttpArgs {
    pub fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl breadth-first from a seed page and list every page visited
    ///
    /// Example: crawl-signals crawl https://example.com --max-depth 2
    Crawl {
        /// Address to start from (e.g., https://example.com)
        seed: String,

        /// Maximum crawl depth
        ///
        /// Depth 0 = just the seed, without fetching it
        /// Depth 1 = the seed + every page it links to
        /// etc.
        #[arg(long, default_value_t = 1)]
        max_depth: usize,

        /// Output results in JSON format instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Show the title, headings and keywords of one page
    ///
    /// Example: crawl-signals signals https://example.com --lang en --keywords 20
    Signals {
        /// Page to analyze
        url: String,

        /// How many keywords to print (JSON output always has all of them)
        #[arg(long, default_value_t = 10)]
        keywords: usize,

        /// Stopword languages to filter out (repeatable; default: all)
        #[arg(long = "lang", value_enum)]
        languages: Vec<Language>,

        /// Output results in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::try_parse_from(["crawl-signals", "crawl", "https://example.com"]).unwrap();
        match cli.command {
            Commands::Crawl { seed, max_depth, json } => {
                assert_eq!(seed, "https://example.com");
                assert_eq!(max_depth, 1);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.http.fetch_config().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_signals_languages() {
        let cli = Cli::try_parse_from([
            "crawl-signals",
            "signals",
            "https://example.com",
            "--lang",
            "es",
            "--lang",
            "french",
        ])
        .unwrap();
        match cli.command {
            Commands::Signals { languages, keywords, .. } => {
                assert_eq!(languages, vec![Language::Spanish, Language::French]);
                assert_eq!(keywords, 10);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_http_options() {
        let cli = Cli::try_parse_from([
            "crawl-signals",
            "crawl",
            "https://example.com",
            "--user-agent",
            "my-bot/2.0",
            "--timeout",
            "3",
        ])
        .unwrap();
        let config = cli.http.fetch_config();
        assert_eq!(config.user_agent, "my-bot/2.0");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Cli::try_parse_from(["crawl-signals", "signals", "https://x.example", "--lang", "de"]);
        assert!(result.is_err());
    }
}
