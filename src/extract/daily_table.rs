//! Structural extraction of the daily quote board.
//!
//! The page carries today's quotes as a plain HTML table with no stable id
//! or class, so the board is discovered by structural signature instead of a
//! fixed selector. Two signatures are attested across the page's history;
//! both are kept behind [`TableDiscovery`] so a markup change upstream is a
//! configuration change here.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::extract::currency::{normalize_price, CurrencyDialect};
use crate::quote::PriceQuote;

/// Rule used to pick the quote board among all tables in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableDiscovery {
    /// First table whose header row has at least four header cells. The
    /// default: survives header-label drift.
    #[default]
    ColumnCount,
    /// First table whose lowercased header cells include "tipo" and some
    /// cell containing "preço" (the source page's own labels).
    HeaderText,
}

/// Options for [`extract_daily_table_with`].
#[derive(Debug, Clone)]
pub struct DailyTableOptions {
    pub discovery: TableDiscovery,
    pub dialect: CurrencyDialect,
    /// Label substituted for a blank category cell; `None` keeps the blank.
    pub blank_category: Option<String>,
}

impl Default for DailyTableOptions {
    fn default() -> Self {
        Self {
            discovery: TableDiscovery::default(),
            dialect: CurrencyDialect::default(),
            blank_category: Some("Desconhecido".to_string()),
        }
    }
}

/// Extract today's quote board with default options.
pub fn extract_daily_table(html: &str) -> ExtractResult<Vec<PriceQuote>> {
    extract_daily_table_with(html, &DailyTableOptions::default())
}

/// Extract today's quote board.
///
/// Walks every row of the discovered table in document order, reads the
/// first four cells as category/date/time/price, and keeps rows whose price
/// normalizes to a finite value greater than zero. Rows with fewer than four
/// cells are decoration and skip silently; header rows carry `<th>` cells
/// only, so they skip the same way.
pub fn extract_daily_table_with(
    html: &str,
    options: &DailyTableOptions,
) -> ExtractResult<Vec<PriceQuote>> {
    let document = Html::parse_document(html);
    let table =
        discover_table(&document, options.discovery).ok_or(ExtractError::TableNotFound)?;

    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td").unwrap();

    let mut quotes = Vec::new();
    for row in table.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(|td| cell_text(&td)).collect();
        if cells.len() < 4 {
            continue;
        }

        let Some(price) = normalize_price(&cells[3], options.dialect) else {
            continue;
        };
        if price <= 0.0 {
            continue;
        }

        let category = if cells[0].is_empty() {
            options.blank_category.clone().unwrap_or_default()
        } else {
            cells[0].clone()
        };

        quotes.push(PriceQuote {
            category,
            date: cells[1].clone(),
            time: cells[2].clone(),
            price,
        });
    }

    debug!(kept = quotes.len(), "daily board rows kept");
    if quotes.is_empty() {
        return Err(ExtractError::EmptyTable);
    }
    Ok(quotes)
}

/// First table matching the discovery rule, in document order.
fn discover_table<'a>(document: &'a Html, discovery: TableDiscovery) -> Option<ElementRef<'a>> {
    let table_sel = Selector::parse("table").unwrap();
    let header_sel = Selector::parse("thead tr th").unwrap();

    document.select(&table_sel).find(|table| {
        let headers: Vec<String> = table
            .select(&header_sel)
            .map(|th| cell_text(&th).to_lowercase())
            .collect();
        match discovery {
            TableDiscovery::ColumnCount => headers.len() >= 4,
            TableDiscovery::HeaderText => {
                headers.iter().any(|h| h == "tipo") && headers.iter().any(|h| h.contains("preço"))
            }
        }
    })
}

fn cell_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = r#"
    <html><body>
    <table>
      <thead><tr><th>Tipo</th><th>Data</th><th>Hora</th><th>Preço (R$)</th></tr></thead>
      <tbody>
        <tr><td>Conilon 7</td><td>05/12/2025</td><td>10:30</td><td>R$ 1.360,00</td></tr>
        <tr><td>Conilon 7/8</td><td>05/12/2025</td><td>10:30</td><td>R$ 1.355,00</td></tr>
        <tr><td>Conilon 8</td><td>05/12/2025</td><td>10:30</td><td>R$ 1.350,00</td></tr>
      </tbody>
    </table>
    </body></html>
    "#;

    #[test]
    fn test_extracts_rows_in_document_order() {
        let quotes = extract_daily_table(BOARD).unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(
            quotes[0],
            PriceQuote {
                category: "Conilon 7".to_string(),
                date: "05/12/2025".to_string(),
                time: "10:30".to_string(),
                price: 1360.0,
            }
        );
        let prices: Vec<f64> = quotes.iter().map(|q| q.price).collect();
        assert_eq!(prices, vec![1360.0, 1355.0, 1350.0]);
    }

    #[test]
    fn test_no_qualifying_table_is_table_not_found() {
        let html = "<html><body><p>Cotações indisponíveis</p></body></html>";
        assert!(matches!(
            extract_daily_table(html),
            Err(ExtractError::TableNotFound)
        ));

        // A narrow nav table does not qualify either.
        let html = r#"
        <table><thead><tr><th>Menu</th><th>Link</th></tr></thead>
        <tbody><tr><td>Home</td><td>/</td></tr></tbody></table>
        "#;
        assert!(matches!(
            extract_daily_table(html),
            Err(ExtractError::TableNotFound)
        ));
    }

    #[test]
    fn test_column_count_skips_narrow_tables() {
        let html = format!(
            r#"<table><thead><tr><th>A</th><th>B</th></tr></thead>
            <tbody><tr><td>x</td><td>y</td></tr></tbody></table>{BOARD}"#
        );
        let quotes = extract_daily_table(&html).unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].category, "Conilon 7");
    }

    #[test]
    fn test_header_text_strategy_skips_unlabeled_wide_tables() {
        // A 4-column decoy comes first; only the labeled board qualifies.
        let html = format!(
            r#"<table>
              <thead><tr><th>A</th><th>B</th><th>C</th><th>D</th></tr></thead>
              <tbody><tr><td>1</td><td>2</td><td>3</td><td>9,99</td></tr></tbody>
            </table>{BOARD}"#
        );
        let options = DailyTableOptions {
            discovery: TableDiscovery::HeaderText,
            ..Default::default()
        };
        let quotes = extract_daily_table_with(&html, &options).unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].price, 1360.0);

        // The column-count strategy picks the decoy instead.
        let quotes = extract_daily_table(&html).unwrap();
        assert_eq!(quotes[0].price, 9.99);
    }

    #[test]
    fn test_short_rows_are_skipped_silently() {
        let html = r#"
        <table>
          <thead><tr><th>Tipo</th><th>Data</th><th>Hora</th><th>Preço</th></tr></thead>
          <tbody>
            <tr><td>Conilon 7</td><td>05/12/2025</td><td>10:30</td><td>R$ 1.360,00</td></tr>
            <tr><td colspan="4">Atualizado às 10:30</td></tr>
          </tbody>
        </table>
        "#;
        let quotes = extract_daily_table(html).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn test_unparseable_and_zero_prices_are_dropped() {
        let html = r#"
        <table>
          <thead><tr><th>Tipo</th><th>Data</th><th>Hora</th><th>Preço</th></tr></thead>
          <tbody>
            <tr><td>Conilon 7</td><td>05/12/2025</td><td>10:30</td><td>R$ 1.360,00</td></tr>
            <tr><td>Escolha</td><td>05/12/2025</td><td>10:30</td><td>-</td></tr>
            <tr><td>Conilon 8</td><td>05/12/2025</td><td>10:30</td><td>R$ 0,00</td></tr>
          </tbody>
        </table>
        "#;
        let quotes = extract_daily_table(html).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].category, "Conilon 7");
    }

    #[test]
    fn test_all_rows_invalid_is_empty_table() {
        let html = r#"
        <table>
          <thead><tr><th>Tipo</th><th>Data</th><th>Hora</th><th>Preço</th></tr></thead>
          <tbody>
            <tr><td>Conilon 7</td><td>05/12/2025</td><td>10:30</td><td>-</td></tr>
            <tr><td>Conilon 8</td><td>05/12/2025</td><td>10:30</td><td>R$ 0,00</td></tr>
          </tbody>
        </table>
        "#;
        assert!(matches!(
            extract_daily_table(html),
            Err(ExtractError::EmptyTable)
        ));
    }

    #[test]
    fn test_blank_category_gets_the_sentinel() {
        let html = r#"
        <table>
          <thead><tr><th>Tipo</th><th>Data</th><th>Hora</th><th>Preço</th></tr></thead>
          <tbody><tr><td></td><td>05/12/2025</td><td>10:30</td><td>R$ 1.360,00</td></tr></tbody>
        </table>
        "#;
        let quotes = extract_daily_table(html).unwrap();
        assert_eq!(quotes[0].category, "Desconhecido");

        // Opting out preserves the blank verbatim.
        let options = DailyTableOptions {
            blank_category: None,
            ..Default::default()
        };
        let quotes = extract_daily_table_with(html, &options).unwrap();
        assert_eq!(quotes[0].category, "");
    }

    #[test]
    fn test_same_input_same_output() {
        let first = extract_daily_table(BOARD).unwrap();
        let second = extract_daily_table(BOARD).unwrap();
        assert_eq!(first, second);
    }
}
