//! Currency-string normalization.
//!
//! The quote board renders prices as localized Brazilian currency text
//! ("R$ 1.360,00"). Two rendering dialects are attested across the page's
//! history, so the normalizer is parameterized instead of guessing: a format
//! change upstream becomes a configuration change here.

/// How the source page renders monetary values as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyDialect {
    /// Comma is the decimal separator; everything that is not an ASCII digit
    /// or a comma (currency symbol, thousands dots, spaces) is stripped
    /// before parsing. Handles decorated cells like "R$ 1.360,00".
    #[default]
    CommaDecimal,
    /// Dots are thousands separators and are removed; the comma becomes the
    /// decimal point. Anything else left in the cell fails the parse, so
    /// this dialect only accepts bare cells like "1.360,00".
    DotThousands,
}

/// Normalize a localized currency string to a float.
///
/// Returns `None` when the text does not survive its dialect's rule. Callers
/// drop such rows instead of erroring: a partially-populated board carries
/// placeholder cells and those are not failures.
pub fn normalize_price(text: &str, dialect: CurrencyDialect) -> Option<f64> {
    let canonical = match dialect {
        CurrencyDialect::CommaDecimal => text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',')
            .collect::<String>()
            .replace(',', "."),
        CurrencyDialect::DotThousands => text.trim().replace('.', "").replace(',', "."),
    };
    canonical.parse::<f64>().ok().filter(|p| p.is_finite())
}
