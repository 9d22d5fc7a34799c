//! Box-drawing table for quote listings.

use crate::quote::PriceQuote;

use super::style::Style;

/// Format a price the way the source locale writes it: `R$ 1.360,00`.
pub fn format_brl(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let mut whole = cents / 100;
    let frac = cents % 100;

    let mut groups: Vec<String> = Vec::new();
    loop {
        if whole < 1000 {
            groups.push(whole.to_string());
            break;
        }
        groups.push(format!("{:03}", whole % 1000));
        whole /= 1000;
    }
    groups.reverse();

    format!("{sign}R$ {},{frac:02}", groups.join("."))
}

/// Render quotes as a box table with Tipo / Data / Hora / Preço columns.
///
/// Column widths follow the widest cell; colors are applied after widths are
/// measured so painting never skews the alignment.
pub fn render_quote_table(quotes: &[PriceQuote], style: &Style) -> String {
    const HEADER: [&str; 4] = ["Tipo", "Data", "Hora", "Preço"];

    let rows: Vec<[String; 4]> = quotes
        .iter()
        .map(|q| {
            [
                q.category.clone(),
                q.date.clone(),
                q.time.clone(),
                format_brl(q.price),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = [0; 4];
    for (width, header) in widths.iter_mut().zip(HEADER) {
        *width = header.chars().count();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));

    let header_cells: Vec<String> = HEADER
        .iter()
        .zip(widths)
        .map(|(h, w)| style.cyan(&pad(h, w)))
        .collect();
    out.push_str(&format!("│ {} │\n", header_cells.join(" │ ")));
    out.push_str(&border(&widths, '├', '┼', '┤'));

    for row in &rows {
        let cells = [
            style.yellow(&pad(&row[0], widths[0])),
            pad(&row[1], widths[1]),
            pad(&row[2], widths[2]),
            style.bold_green(&pad(&row[3], widths[3])),
        ];
        out.push_str(&format!("│ {} │\n", cells.join(" │ ")));
    }

    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

fn border(widths: &[usize; 4], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(category: &str, price: f64) -> PriceQuote {
        PriceQuote {
            category: category.to_string(),
            date: "05/12/2025".to_string(),
            time: "10:30".to_string(),
            price,
        }
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1360.0), "R$ 1.360,00");
        assert_eq!(format_brl(980.5), "R$ 980,50");
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.05), "R$ 0,05");
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let table = render_quote_table(
            &[quote("Conilon 7", 1360.0), quote("Conilon 8", 1350.0)],
            &Style::new(false),
        );
        assert!(table.contains("Tipo"));
        assert!(table.contains("Preço"));
        assert!(table.contains("Conilon 7"));
        assert!(table.contains("R$ 1.360,00"));
    }

    #[test]
    fn test_table_lines_are_rectangular() {
        let table = render_quote_table(
            &[quote("Conilon 7", 1360.0), quote("Conilon 7/8", 9.5)],
            &Style::new(false),
        );
        let lines: Vec<&str> = table.lines().collect();
        // top border, header, divider, two rows, bottom border
        assert_eq!(lines.len(), 6);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_colors_do_not_skew_alignment() {
        let plain = render_quote_table(&[quote("Conilon 7", 1360.0)], &Style::new(false));
        let colored = render_quote_table(&[quote("Conilon 7", 1360.0)], &Style::new(true));
        let strip = |s: &str| {
            let mut out = String::new();
            let mut in_escape = false;
            for c in s.chars() {
                match (in_escape, c) {
                    (false, '\x1b') => in_escape = true,
                    (false, c) => out.push(c),
                    (true, 'm') => in_escape = false,
                    (true, _) => {}
                }
            }
            out
        };
        assert_eq!(strip(&colored), plain);
    }
}
