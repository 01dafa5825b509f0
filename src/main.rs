use anyhow::Result;
use clap::{Parser, Subcommand};
use mathops::calculator::Operator;
use mathops::config::Config;
use mathops::ui::{CalcStatus, CalculatorPage, run_calc};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mathops", version, about = "A two-operand arithmetic calculator")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive calculator session (default)
    Session,
    /// Evaluate a single operation
    Calc {
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Operator label or symbol, e.g. "+" or "Int /"
        operator: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
        /// Print the expression as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the operator labels
    Operators,
    /// Show the effective configuration
    Config {
        /// Write the default config if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => {
            let stdin = io::stdin();
            let mut page = CalculatorPage::new(config, stdin.lock(), io::stdout());
            page.run()?;
        }
        Command::Calc {
            left,
            operator,
            right,
            json,
        } => return calc(&left, &operator, &right, json),
        Command::Operators => {
            for (index, op) in Operator::CHOICES.iter().enumerate() {
                println!("{}. {}", index + 1, op.label());
            }
        }
        Command::Config { init } => {
            let path = cli.config.unwrap_or_else(Config::default_path);
            if init && !path.exists() {
                config.save(&path)?;
                tracing::info!(path = %path.display(), "wrote default config");
            }
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn calc(left: &str, operator: &str, right: &str, json: bool) -> Result<ExitCode> {
    let status = run_calc(
        left,
        operator,
        right,
        json,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;

    Ok(match status {
        CalcStatus::Printed => ExitCode::SUCCESS,
        CalcStatus::Rejected => ExitCode::FAILURE,
    })
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
