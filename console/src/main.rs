use anyhow::{Context, Result};
use clap::Parser;
use console::input::{read_count, read_line, read_ratings};
use console::{paginate, RequestQueue};
use engine::{DocumentStatus, SearchServer};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Console front end for the in-memory search engine.
///
/// Input format: one line of stop words, a document count, then for every
/// document a text line and a ratings line (count followed by that many
/// integers). Every further line is a query.
#[derive(Parser)]
struct Args {
    /// Results per display page
    #[arg(long, default_value_t = 3)]
    page_size: usize,
    /// Print the full index as JSON after loading documents
    #[arg(long, default_value_t = false)]
    dump: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let stop_words = read_line(&mut reader)?.context("missing stop words line")?;
    let mut server = SearchServer::with_stop_words(&stop_words)?;

    let count_line = read_line(&mut reader)?.context("missing document count line")?;
    let document_count = read_count(&count_line)?;

    for id in 0..document_count {
        let text = read_line(&mut reader)?.context("missing document line")?;
        let ratings_line = read_line(&mut reader)?.context("missing ratings line")?;
        let ratings = read_ratings(&ratings_line)?;
        server.add_document(id as i32, &text, DocumentStatus::Actual, &ratings)?;
    }
    tracing::info!(documents = server.document_count(), "index loaded");

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&server.dump())?);
    }

    let mut requests = RequestQueue::new(&server);
    while let Some(query) = read_line(&mut reader)? {
        if query.is_empty() {
            continue;
        }
        match requests.add_find_request(&query) {
            Ok(documents) => {
                for (number, page) in paginate(&documents, args.page_size)?.iter().enumerate() {
                    println!("-- page {} --", number + 1);
                    for document in *page {
                        println!("{document}");
                    }
                }
            }
            Err(error) => tracing::warn!(%error, query = %query, "query rejected"),
        }
    }
    tracing::info!(no_result = requests.no_result_requests(), "session finished");
    Ok(())
}
