//! The full terminal report: today's board, per-grade charts, recent quotes.
//!
//! One GET serves both extractors. The daily board is best-effort: the page
//! takes it down outside business hours, so its absence renders a
//! placeholder. The monthly history is mandatory and fails the command.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::output::{self, OutputOptions};
use crate::extract::{extract_daily_table, extract_monthly_history};
use crate::fetch::PageClient;
use crate::quote::PriceQuote;
use crate::render::{self, plot, PlotConfig};

/// Grades listed in the history but left out of the chart section.
const UNCHARTED: &[&str] = &["Escolha"];

/// Run the full report.
pub async fn run(
    client: &PageClient,
    opts: &OutputOptions,
    limit: usize,
    charts: bool,
) -> Result<()> {
    let spinner = if opts.quiet || opts.json {
        None
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        bar.set_message("Buscando cotações...");
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    };

    let page = client.fetch_page().await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let html = page.context("failed to fetch the quote page")?;

    let daily = extract_daily_table(&html);
    let monthly = extract_monthly_history(&html);

    if opts.json {
        let daily_json = daily
            .map(|quotes| serde_json::json!(quotes))
            .unwrap_or(serde_json::Value::Null);
        let monthly = monthly.context("failed to extract the monthly history")?;
        output::print_json(&serde_json::json!({
            "cotacaoDoDia": daily_json,
            "historicoMensal": monthly,
        }));
        return Ok(());
    }

    let style = opts.style();

    if !opts.quiet {
        println!();
        println!(
            "{}",
            style.bold_cyan("╔═══════════════════════════════════════════╗")
        );
        println!(
            "{}",
            style.bold_cyan("║   Cotação do Café - Cooabriel             ║")
        );
        println!(
            "{}",
            style.bold_cyan("╚═══════════════════════════════════════════╝")
        );
        println!("\n{}\n", style.bold_yellow("📊 Cotação do Dia"));
    }

    match daily {
        Ok(quotes) => print!("{}", render::render_quote_table(&quotes, &style)),
        Err(err) => {
            tracing::debug!(%err, "daily board unavailable");
            println!("{}", style.dim("  Não disponível no momento"));
        }
    }

    let monthly = monthly.context("failed to extract the monthly history")?;

    if !opts.quiet {
        println!("\n{}\n", style.bold_yellow("📈 Histórico Mensal"));
    }
    println!(
        "  {} {}",
        style.dim("Total de cotações:"),
        style.bold_white(&monthly.len().to_string())
    );

    if charts && !opts.quiet {
        for category in charted_categories(&monthly) {
            let series: Vec<f64> = monthly
                .iter()
                .filter(|q| q.category == category)
                .map(|q| q.price)
                .collect();
            let dates: Vec<&str> = monthly
                .iter()
                .filter(|q| q.category == category)
                .map(|q| q.date.as_str())
                .collect();

            let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            println!("\n{}", style.bold_green(&category));
            println!(
                "{}",
                style.dim(&format!(
                    "  Período: {} a {}",
                    dates.first().unwrap_or(&""),
                    dates.last().unwrap_or(&"")
                ))
            );
            println!(
                "{}\n",
                style.dim(&format!("  Variação: R$ {min:.2} - R$ {max:.2}"))
            );

            let chart = plot(
                &series,
                &PlotConfig {
                    height: 8,
                    format: |x| format!("R$ {:>6}", x.round() as i64),
                },
            );
            println!("{}", style.green(&chart));
        }
    }

    let shown = if limit == 0 {
        &monthly[..]
    } else {
        &monthly[monthly.len().saturating_sub(limit)..]
    };

    if !opts.quiet {
        let heading = if limit == 0 {
            "📋 Todas as Cotações"
        } else {
            "📋 Últimas Cotações"
        };
        println!("\n{}\n", style.bold_yellow(heading));
    }
    print!("{}", render::render_quote_table(shown, &style));

    if !opts.quiet {
        let note = if limit == 0 {
            format!("(Total: {} cotações)", monthly.len())
        } else {
            format!(
                "(Mostrando últimas {} de {} cotações)",
                shown.len(),
                monthly.len()
            )
        };
        println!("{}", style.dim(&format!("\n  {note}")));

        println!("{}", style.dim("\n  ⚠️  AVISO LEGAL"));
        println!(
            "{}",
            style.dim("  Dados fornecidos \"como está\", extraídos da página pública da")
        );
        println!(
            "{}",
            style.dim("  Cooabriel. Não nos responsabilizamos por decisões tomadas com")
        );
        println!("{}", style.dim("  base nestas informações."));
    }

    Ok(())
}

/// Distinct categories in first-seen order, minus the uncharted grades.
fn charted_categories(history: &[PriceQuote]) -> Vec<String> {
    let mut seen = Vec::new();
    for quote in history {
        if UNCHARTED.contains(&quote.category.as_str()) {
            continue;
        }
        if !seen.contains(&quote.category) {
            seen.push(quote.category.clone());
        }
    }
    seen
}
