//! CLI subcommand implementations for the `cotacao` binary.

pub mod daily_cmd;
pub mod monthly_cmd;
pub mod output;
pub mod report_cmd;
