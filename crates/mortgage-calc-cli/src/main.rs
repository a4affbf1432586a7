mod commands;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use serde_json::Value;
use simple_logger::SimpleLogger;
use std::process;

use commands::batch::BatchArgs;
use commands::schedule::ScheduleArgs;

/// Fixed-rate mortgage amortization schedules
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage amortization schedules",
    long_about = "Computes the fixed monthly payment of a mortgage and its month-by-month \
                  amortization schedule with decimal precision. Run without a subcommand \
                  to be prompted for a single loan."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for one loan and print its schedule (the default)
    Prompt,
    /// Prompt for loans repeatedly until told to stop
    Interactive,
    /// Compute a schedule from flags or a JSON loan
    Schedule(ScheduleArgs),
    /// Compute schedules for a JSON array of loans
    Batch(BatchArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<Value, Box<dyn std::error::Error>> =
        match cli.command.unwrap_or(Commands::Prompt) {
            Commands::Prompt => commands::prompt::run_prompt(),
            Commands::Interactive => {
                commands::prompt::run_interactive(&cli.output).map(|()| Value::Null)
            }
            Commands::Schedule(args) => commands::schedule::run_schedule(args),
            Commands::Batch(args) => commands::batch::run_batch(args),
            Commands::Version => {
                println!("mortgage {}", env!("CARGO_PKG_VERSION"));
                return;
            }
        };

    match result {
        Ok(Value::Null) => process::exit(0),
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow(), e);
    }
}
