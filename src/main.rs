#![allow(dead_code, unused_imports)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod cli;
mod error;
mod extract;
mod fetch;
mod quote;
mod render;

#[derive(Parser)]
#[command(
    name = "cotacao",
    about = "Cotação do café da Cooabriel — today's board and the monthly history in your terminal",
    version,
    after_help = "Run 'cotacao <command> --help' for details on each command.\nRun 'cotacao' with no command for the full report."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress decorative output (header, emojis, charts, notices)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// How many recent quotes to list (0 = all)
    #[arg(long, default_value = "10")]
    limit: usize,

    /// Skip the per-grade ASCII charts
    #[arg(long)]
    no_charts: bool,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's quote board only
    Daily,
    /// The monthly history only
    Monthly,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let directive = if args.verbose {
        "cotacao=debug"
    } else {
        "cotacao=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = cli::output::OutputOptions {
        json: args.json,
        quiet: args.quiet,
        color: !args.no_color,
    };
    let client = fetch::PageClient::new(args.timeout);

    let result = match args.command {
        // No subcommand → the full report
        None => cli::report_cmd::run(&client, &opts, args.limit, !args.no_charts).await,
        Some(Commands::Daily) => cli::daily_cmd::run(&client, &opts).await,
        Some(Commands::Monthly) => cli::monthly_cmd::run(&client, &opts, args.limit).await,
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cotacao", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if opts.json {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        } else {
            eprintln!("\n❌ Erro: {e:#}");
        }
        std::process::exit(1);
    }
    result
}
