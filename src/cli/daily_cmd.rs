//! `cotacao daily` — today's quote board only.
//!
//! Unlike the full report, this command fails hard when the board is absent:
//! the user asked for exactly this data, so "not available" is an error here.

use anyhow::{Context, Result};

use crate::cli::output::{self, OutputOptions};
use crate::fetch::{fetch_daily_quotes, PageClient};
use crate::render;

/// Run the daily command.
pub async fn run(client: &PageClient, opts: &OutputOptions) -> Result<()> {
    let quotes = fetch_daily_quotes(client)
        .await
        .context("failed to fetch today's quote board")?;

    if opts.json {
        output::print_json(&serde_json::json!(quotes));
        return Ok(());
    }

    let style = opts.style();
    if !opts.quiet {
        println!("\n{}\n", style.bold_yellow("📊 Cotação do Dia"));
    }
    print!("{}", render::render_quote_table(&quotes, &style));
    Ok(())
}
