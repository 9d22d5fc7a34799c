//! Cooabriel café price quotes.
//!
//! Fetches the cooperative's quote page and extracts two datasets into
//! [`PriceQuote`] records: today's quote board (an HTML table discovered by
//! structural heuristics) and the monthly history (a JSON island the page
//! embeds for hydration). Both extractors are pure functions over page text;
//! [`PageClient`] is the one piece that talks to the network.
//!
//! ```no_run
//! use cotacao_cafe::{fetch_monthly_history, PageClient};
//!
//! # async fn demo() -> Result<(), cotacao_cafe::QuoteError> {
//! let client = PageClient::new(10_000);
//! let history = fetch_monthly_history(&client).await?;
//! for quote in history.iter().take(3) {
//!     println!("{} {} R$ {:.2}", quote.date, quote.category, quote.price);
//! }
//! # Ok(())
//! # }
//! ```

#![allow(dead_code, unused_imports)]

pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod quote;
pub mod render;

pub use error::{ExtractError, ExtractResult, FetchError, QuoteError};
pub use extract::{
    extract_daily_table, extract_daily_table_with, extract_monthly_history, CurrencyDialect,
    DailyTableOptions, TableDiscovery,
};
pub use fetch::{fetch_daily_quotes, fetch_monthly_history, PageClient, QUOTE_PAGE_URL};
pub use quote::PriceQuote;
