//! The quote record both extractors produce.

use serde::{Deserialize, Serialize};

/// One café-grade price observation.
///
/// `date` and `time` are kept exactly as the source page renders them
/// (`dd/mm/yyyy` and `hh:mm`). The page's own formatting is the contract
/// consumers rely on, so the core never re-parses them into date types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Product grade label (e.g. "Conilon 7"). Free text from the source,
    /// not a closed set.
    pub category: String,
    /// Quote date, `dd/mm/yyyy`, verbatim.
    pub date: String,
    /// Quote time, `hh:mm`, verbatim.
    pub time: String,
    /// Price in the source currency (BRL), normalized to a plain float.
    pub price: f64,
}
