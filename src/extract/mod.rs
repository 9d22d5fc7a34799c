//! The extraction core: pure functions over fetched page text.
//!
//! Both extractors take the full page HTML, hold no state, and either
//! return the complete ordered quote sequence or a single typed failure,
//! never a partial mix.

pub mod currency;
pub mod daily_table;
pub mod monthly_history;

pub use currency::{normalize_price, CurrencyDialect};
pub use daily_table::{
    extract_daily_table, extract_daily_table_with, DailyTableOptions, TableDiscovery,
};
pub use monthly_history::extract_monthly_history;
