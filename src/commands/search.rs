use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

use partquote::client::SearchClient;
use partquote::config;
use partquote::export;
use partquote::import;
use partquote::resolver;

/// Execute the search command
///
/// Merges inline part numbers with a file-sourced list, resolves the batch
/// sequentially and writes the result workbook.
pub async fn execute(
    config_path: &Path,
    parts: Vec<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let mut part_numbers = parts;
    if let Some(file) = &file {
        part_numbers.extend(import::read_part_list(file)?);
    }
    if part_numbers.is_empty() {
        anyhow::bail!("no part numbers given; pass them inline or via --file");
    }

    info!(count = part_numbers.len(), "starting part lookup batch");
    println!(
        "{}",
        format!("Looking up {} part number(s)...", part_numbers.len()).yellow()
    );

    let mut client = SearchClient::new(&cfg.api)?;

    let progress = ProgressBar::new(part_numbers.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let rows = resolver::resolve_batch(&mut client, &part_numbers, |_, part| {
        progress.set_message(part.to_string());
        progress.inc(1);
    })
    .await;
    progress.finish_and_clear();

    let output_path = output.unwrap_or_else(|| PathBuf::from(&cfg.output.result_file));
    export::write_results(&output_path, &rows)?;

    let found = rows.iter().filter(|r| r.price > 0.0).count();
    let similar = rows
        .iter()
        .filter(|r| r.remark == "matched via similar part")
        .count();
    let missing = rows.iter().filter(|r| r.remark == "not found").count();

    println!("{}", "✓ Lookup complete".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Priced".cyan(), found);
    println!("  {}: {}", "Similar matches".cyan(), similar);
    println!("  {}: {}", "Not found".cyan(), missing);
    println!("  {}: {}", "Output".cyan(), output_path.display());

    Ok(())
}
