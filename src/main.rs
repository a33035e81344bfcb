//! TCG Inventory - CLI entry point
//!
//! Subcommands: catalog search, marketplace CSV repricing, and inventory
//! summaries over an exported CSV file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tcg_inventory::{decode, encode, scryfall, Inventory, PricingRules};

/// TCG card inventory manager
#[derive(Parser, Debug)]
#[command(name = "tcg_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the card catalog by name
    Search {
        /// Card name to search for
        name: String,
        /// Maximum number of results to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Recalculate marketplace prices in a bulk-upload CSV
    Reprice {
        /// Input CSV exported from the marketplace
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the repriced CSV
        #[arg(short, long)]
        output: PathBuf,
        /// File with one excluded card name per line
        #[arg(long)]
        exclusions: Option<PathBuf>,
    },
    /// Import a CSV and print inventory totals
    Summary {
        /// Input CSV exported from the marketplace
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Command::Search { name, limit } => search(&name, limit).await,
        Command::Reprice {
            input,
            output,
            exclusions,
        } => reprice(&input, &output, exclusions.as_deref()),
        Command::Summary { input } => summary(&input),
    }
}

async fn search(name: &str, limit: usize) -> anyhow::Result<()> {
    let records = scryfall::search_cards(name)
        .await
        .with_context(|| format!("search for {name:?} failed"))?;

    for record in records.iter().take(limit) {
        let price = record
            .prices
            .market
            .map(|p| format!("${p:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} | {} ({}) #{} | {}",
            record.name, record.set_name, record.set_code, record.collector_number, price
        );
    }
    if records.len() > limit {
        println!("... and {} more printings", records.len() - limit);
    }
    Ok(())
}

fn reprice(
    input: &std::path::Path,
    output: &std::path::Path,
    exclusions: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let rules = match exclusions {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read exclusion file {}", path.display()))?;
            PricingRules::from_exclusions_text(&text)
        }
        None => PricingRules::new(),
    };

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let mut import = decode(&text).context("import failed")?;

    rules.reprice_rows(&mut import.rows);

    std::fs::write(output, encode(&import.rows))
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Repriced {} rows -> {} ({} malformed skipped, {} out of stock dropped)",
        import.rows.len(),
        output.display(),
        import.skipped_rows,
        import.out_of_stock_rows
    );
    Ok(())
}

fn summary(input: &std::path::Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut inventory = Inventory::new();
    let summary = inventory.import_csv(&text).context("import failed")?;

    println!("Lines:       {}", inventory.len());
    println!("Cards held:  {}", inventory.total_quantity());
    println!("Total value: ${:.2}", inventory.total_value());
    if summary.skipped_rows > 0 {
        println!("Malformed rows skipped: {}", summary.skipped_rows);
    }
    if summary.out_of_stock_rows > 0 {
        println!("Out-of-stock rows dropped: {}", summary.out_of_stock_rows);
    }
    if summary.rejected_rows > 0 {
        println!("Rows failing validation: {}", summary.rejected_rows);
    }
    Ok(())
}
