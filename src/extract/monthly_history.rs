//! Extraction of the monthly quote history from the page's data island.
//!
//! The quote page is server-rendered by Next.js, which embeds its hydration
//! state as a JSON island in `<script id="__NEXT_DATA__">`. The monthly
//! history lives at a fixed path inside that payload; the sibling `semanal`
//! section and the per-record harvest reference prices are ignored.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::quote::PriceQuote;

/// Path to the monthly history inside the island payload.
const MENSAL_POINTER: &str = "/props/pageProps/ssp/mensal";

/// One café type's history as rendered into the island. Unknown payload
/// fields (precoSafraAntiga, precoSafraNova, ...) are skipped by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CafeTypeHistory {
    nome_cafe: String,
    cotacoes: Vec<RawQuote>,
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    data: String,
    hora: String,
    preco: f64,
}

/// Extract the monthly history.
///
/// Flattens the per-type histories in encountered order: outer list first,
/// then each type's records. Callers that want chronological output rely on
/// the page already rendering records chronologically; that is an observed
/// property of the source, and this function does not re-sort.
pub fn extract_monthly_history(html: &str) -> ExtractResult<Vec<PriceQuote>> {
    let island_re = Regex::new(
        r#"<script id="__NEXT_DATA__" type="application/json">(.*?)</script>"#,
    )
    .unwrap();

    let payload = island_re
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or(ExtractError::DataIslandNotFound)?
        .as_str();

    let data: Value =
        serde_json::from_str(payload).map_err(ExtractError::MalformedDataIsland)?;

    let mensal = data
        .pointer(MENSAL_POINTER)
        .ok_or(ExtractError::MissingHistorySection)?;
    let histories: Vec<CafeTypeHistory> = serde_json::from_value(mensal.clone())
        .map_err(|_| ExtractError::MissingHistorySection)?;

    let mut quotes = Vec::new();
    for history in &histories {
        for record in &history.cotacoes {
            quotes.push(PriceQuote {
                category: history.nome_cafe.clone(),
                date: record.data.clone(),
                time: record.hora.clone(),
                price: record.preco,
            });
        }
    }

    debug!(
        types = histories.len(),
        quotes = quotes.len(),
        "monthly history flattened"
    );
    if quotes.is_empty() {
        return Err(ExtractError::EmptyHistory);
    }
    Ok(quotes)
}
