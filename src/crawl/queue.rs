// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl with a breadth-first approach.
//
// How it works:
// 1. Start with the seed address in a queue, at depth 0
// 2. Take the next address from the front of the queue
// 3. Skip it if it was already visited, otherwise mark it visited and
//    record it in the result
// 4. If its depth is below max_depth, fetch it, extract its links, and add
//    them to the back of the queue at depth + 1
// 5. Repeat until the queue is empty
//
// An address can sit in the queue several times (two pages link to it before
// it is visited). That's fine: only the first copy to come out is visited,
// the rest are dropped at step 3. Because the queue is FIFO, that first copy
// is always the one found at the shallowest depth.
//
// A page that fails to download or parse doesn't stop the crawl. The failure
// is logged and recorded, and the crawl carries on with the next address.
//
// Rust concepts:
// - HashSet: To track visited addresses (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// =============================================================================

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::PageError;
use crate::extract::extract_links;
use crate::fetch::{load_document, Fetcher};

// An address waiting in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub address: String,
    pub depth: usize, // How many links away from the seed
}

/// A visited page that could not be fetched or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    pub address: String,
    pub depth: usize,
    pub error: PageError,
}

/// Outcome of a crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    /// Every visited address, in the order it was taken off the queue.
    pub visited: Vec<String>,
    /// Visited addresses whose page could not be loaded.
    pub failures: Vec<PageFailure>,
}

// The queue plus the visited set. Only the crawl loop touches it.
struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
}

impl Frontier {
    fn new(seed: &str) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(FrontierEntry {
            address: seed.to_string(),
            depth: 0,
        });

        Self {
            queue,
            visited: HashSet::new(),
        }
    }

    // Takes the next address that hasn't been visited yet and marks it
    // visited. Returns None once the queue is empty.
    fn pop_unvisited(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.queue.pop_front() {
            // insert() returns false if the address was already there
            if self.visited.insert(entry.address.clone()) {
                return Some(entry);
            }
            debug!(address = %entry.address, "already visited, skipping");
        }
        None
    }

    // Queues every link that isn't visited yet at the given depth
    fn discover(&mut self, links: Vec<String>, depth: usize) {
        for link in links {
            if !self.visited.contains(&link) {
                self.queue.push_back(FrontierEntry {
                    address: link,
                    depth,
                });
            }
        }
    }
}

// Crawls breadth-first from `seed`
//
// Parameters:
//   fetcher: how pages are downloaded (HTTP in the CLI, in-memory in tests)
//   seed: the address to start from (always visited, even if not https)
//   max_depth: pages at this depth are recorded but their links are not
//              followed
//
// Example:
//   max_depth=0: Only the seed, which is not even fetched
//   max_depth=1: The seed + every page it links to
//   max_depth=2: ... + every page those link to
pub async fn build_crawl_graph<F>(fetcher: &F, seed: &str, max_depth: usize) -> CrawlResult
where
    F: Fetcher + ?Sized,
{
    let mut frontier = Frontier::new(seed);
    let mut result = CrawlResult::default();

    while let Some(entry) = frontier.pop_unvisited() {
        result.visited.push(entry.address.clone());

        if entry.depth >= max_depth {
            continue;
        }

        info!(address = %entry.address, depth = entry.depth, "crawling");

        let links = match load_document(fetcher, &entry.address).await {
            Ok(document) => extract_links(document.root()),
            Err(error) => {
                warn!(address = %entry.address, %error, "failed to load page");
                result.failures.push(PageFailure {
                    address: entry.address,
                    depth: entry.depth,
                    error,
                });
                continue;
            }
        };

        debug!(address = %entry.address, links = links.len(), "extracted links");
        frontier.discover(links, entry.depth + 1);
    }

    info!(
        visited = result.visited.len(),
        failures = result.failures.len(),
        "crawl finished"
    );

    result
}
