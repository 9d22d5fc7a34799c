//! Presentation options shared by every command.
//!
//! The global CLI flags become one immutable struct built in `main` and
//! passed down explicitly. Render functions never consult process-wide
//! state, so any caller (tests included) controls presentation per call.

use crate::render::Style;

/// Immutable presentation configuration for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Emit machine-readable JSON instead of the formatted report.
    pub json: bool,
    /// Suppress decorative output (header, emojis, charts, notices).
    pub quiet: bool,
    /// ANSI color.
    pub color: bool,
}

impl OutputOptions {
    pub fn style(&self) -> Style {
        Style::new(self.color)
    }
}

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_flag_drives_the_style() {
        let opts = OutputOptions {
            json: false,
            quiet: false,
            color: false,
        };
        assert_eq!(opts.style().green("x"), "x");
    }
}
