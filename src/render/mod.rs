//! Terminal rendering: box tables, ASCII charts, ANSI styling.
//!
//! Everything here is a pure function of its inputs. Presentation options
//! travel as explicit values (see [`crate::cli::output::OutputOptions`]),
//! never as process-global state.

pub mod chart;
pub mod style;
pub mod table;

pub use chart::{plot, PlotConfig};
pub use style::Style;
pub use table::{format_brl, render_quote_table};
