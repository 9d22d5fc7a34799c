//! `cotacao monthly` — the monthly history as a listing.

use anyhow::{Context, Result};

use crate::cli::output::{self, OutputOptions};
use crate::fetch::{fetch_monthly_history, PageClient};
use crate::render;

/// Run the monthly command. `limit` bounds the listing to the most recent
/// records; `0` lists everything.
pub async fn run(client: &PageClient, opts: &OutputOptions, limit: usize) -> Result<()> {
    let history = fetch_monthly_history(client)
        .await
        .context("failed to fetch the monthly history")?;

    if opts.json {
        output::print_json(&serde_json::json!(history));
        return Ok(());
    }

    let style = opts.style();
    if !opts.quiet {
        println!("\n{}\n", style.bold_yellow("📈 Histórico Mensal"));
        println!(
            "  {} {}\n",
            style.dim("Total de cotações:"),
            style.bold_white(&history.len().to_string())
        );
    }

    let shown = if limit == 0 {
        &history[..]
    } else {
        &history[history.len().saturating_sub(limit)..]
    };
    print!("{}", render::render_quote_table(shown, &style));
    Ok(())
}
