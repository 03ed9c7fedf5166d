use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

// Declare modules
mod client;
mod config;
mod constants;
mod domain;
mod labels;
mod search;
#[cfg(test)]
mod test_utils;

use crate::{
    client::{AptosClient, CoinRegistry},
    config::AppConfig,
    domain::ExplorerError,
    search::{SearchContext, SearchController, SearchMode, SearchResult, search},
};

// aptex version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// aptex - search the Aptos blockchain from the terminal
///
/// Accepts addresses, transaction hashes or versions, block heights, coin
/// struct tags, ANS names, coin names, known labels, and emoji symbols.
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// The query to search for
    query: Option<String>,

    /// Network to search on (mainnet, testnet, devnet, local, or a
    /// configured custom network)
    #[arg(short, long)]
    network: Option<String>,

    /// Persist the selected network as the default
    #[arg(long)]
    save_network: bool,

    /// Read queries line by line from stdin; the latest line wins
    #[arg(short, long)]
    interactive: bool,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(name) = &cli.network {
        let network = config.resolve_network(name).ok_or_else(|| {
            ExplorerError::invalid_input(format!("unknown network '{name}'")).into_report()
        })?;
        config.network = network;
        if cli.save_network {
            config.save()?;
        }
    }

    let network_name = config.network.name().to_string();
    let client = AptosClient::from_config(&config.network)?;

    // The curated list is an enrichment; search still works without it.
    let coins = match client.fetch_coin_list().await {
        Ok(registry) => {
            tracing::debug!("coin registry ready ({} entries)", registry.len());
            registry
        }
        Err(e) => {
            tracing::warn!("coin registry unavailable, searching without it: {e}");
            CoinRegistry::empty()
        }
    };

    let ctx = SearchContext::new(network_name, Arc::new(client), Arc::new(coins));

    if cli.interactive {
        run_interactive(ctx).await
    } else if let Some(query) = cli.query.as_deref() {
        run_once(&ctx, query).await
    } else {
        Err(eyre!("nothing to do: pass a query or --interactive"))
    }
}

/// Run a single search and print the ranked results.
async fn run_once(ctx: &SearchContext<AptosClient>, query: &str) -> Result<()> {
    let results = search(ctx, query).await;
    print_results(&results);
    Ok(())
}

/// Read queries from stdin through the debounced session controller;
/// only the latest line's results are ever printed.
async fn run_interactive(ctx: SearchContext<AptosClient>) -> Result<()> {
    match ctx.backend.get_ledger_info().await {
        Ok(info) => eprintln!(
            "connected to {} (chain id {}, ledger version {}, block height {})",
            ctx.network, info.chain_id, info.ledger_version, info.block_height
        ),
        Err(e) => tracing::warn!("ledger info unavailable: {e}"),
    }

    let (controller, mut rx) = SearchController::new(ctx);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => controller.input(&line),
                None => break,
            },
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                if state.mode == SearchMode::Results {
                    eprintln!("results for '{}':", state.query);
                    print_results(&state.results);
                }
            }
        }
    }

    Ok(())
}

fn print_results(results: &[SearchResult]) {
    for result in results {
        match &result.to {
            Some(to) => println!("{:<48} {to}", result.label),
            None => println!("{}", result.label),
        }
    }
}
