//! ASCII line chart for price series.
//!
//! Draws the classic terminal line plot: a labeled value axis on the left,
//! one column per observation, box-drawing glyphs for the line itself.
//! The geometry follows the widely-used asciichart layout so the report
//! looks the way people expect these charts to look.

/// Plot configuration.
#[derive(Clone)]
pub struct PlotConfig {
    /// Number of value steps in the plot body; the chart prints
    /// `height + 1` lines for a non-flat series.
    pub height: usize,
    /// Formats an axis tick value into its label. Labels should be padded to
    /// a constant width; the axis aligns on label width.
    pub format: fn(f64) -> String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            height: 8,
            format: |x| format!("{x:>10.2}"),
        }
    }
}

/// Columns reserved left of the data region (label + gap + axis glyph).
const OFFSET: usize = 3;

/// Render a series as an ASCII line chart. Empty input yields an empty
/// string; the caller decides whether that deserves a message.
pub fn plot(series: &[f64], config: &PlotConfig) -> String {
    if series.is_empty() {
        return String::new();
    }

    let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let ratio = if range > 0.0 {
        config.height as f64 / range
    } else {
        1.0
    };
    let min2 = (min * ratio).round() as i64;
    let max2 = (max * ratio).round() as i64;
    let rows = (max2 - min2) as usize;
    let width = series.len() + OFFSET;

    let scaled = |value: f64| ((value * ratio).round() as i64 - min2) as usize;

    // One cell per grid slot; a label occupies a single cell, so a
    // fixed-width format keeps the axis straight.
    let mut grid: Vec<Vec<String>> = vec![vec![" ".to_string(); width]; rows + 1];

    // Value axis and tick labels
    for y in min2..=max2 {
        let value = if rows > 0 {
            max - (y - min2) as f64 * range / rows as f64
        } else {
            y as f64
        };
        let label = (config.format)(value);
        let row = (y - min2) as usize;
        let col = (OFFSET as i64 - label.chars().count() as i64).max(0) as usize;
        grid[row][col] = label;
        grid[row][OFFSET - 1] = if y == 0 { "┼" } else { "┤" }.to_string();
    }

    // The first observation meets the axis.
    grid[rows - scaled(series[0])][OFFSET - 1] = "┼".to_string();

    for x in 0..series.len() - 1 {
        let y0 = scaled(series[x]);
        let y1 = scaled(series[x + 1]);
        if y0 == y1 {
            grid[rows - y0][x + OFFSET] = "─".to_string();
        } else {
            grid[rows - y1][x + OFFSET] = if y0 > y1 { "╰" } else { "╭" }.to_string();
            grid[rows - y0][x + OFFSET] = if y0 > y1 { "╮" } else { "╯" }.to_string();
            for y in (y0.min(y1) + 1)..y0.max(y1) {
                grid[rows - y][x + OFFSET] = "│".to_string();
            }
        }
    }

    grid.iter()
        .map(|row| row.concat().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
