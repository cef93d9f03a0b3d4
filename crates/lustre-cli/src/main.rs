//! `lustre` - inspect, validate and export UI customizations.
//!
//! ```text
//! lustre resolve theme.yaml --field glassOpacity --field borderRadius
//! lustre css theme.yaml --selector .preview --preset ocean
//! lustre check theme.json
//! lustre presets --json
//! ```

mod commands;
mod swatch;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lustre")]
#[command(version)]
#[command(about = "Resolve UI customizations into CSS values")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved value of each field
    Resolve {
        /// Customization file (.yaml, .yml or .json); defaults apply when omitted
        file: Option<PathBuf>,

        /// Only resolve these keys
        #[arg(short, long = "field", value_name = "KEY")]
        fields: Vec<String>,
    },

    /// Export CSS custom properties
    Css {
        file: Option<PathBuf>,

        /// Rule selector
        #[arg(short, long, default_value = ":root")]
        selector: String,

        /// Apply a color preset before exporting
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Report malformed or out-of-range values
    Check { file: PathBuf },

    /// List the built-in color presets
    Presets,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let output = match cli.command {
        Commands::Resolve { file, fields } => {
            let c = commands::load(file.as_deref())?;
            commands::resolve(&c, &fields, cli.json)?
        }
        Commands::Css {
            file,
            selector,
            preset,
        } => {
            commands::validate_selector(&selector)?;
            let c = commands::load(file.as_deref())?;
            commands::css(&c, &selector, preset.as_deref())?
        }
        Commands::Check { file } => {
            let c = commands::load(Some(&file))?;
            let (report, clean) = commands::check(&c, cli.json)?;
            print!("{}", with_newline(report));
            return Ok(if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Commands::Presets => commands::presets(cli.json)?,
    };
    print!("{}", with_newline(output));
    Ok(ExitCode::SUCCESS)
}

fn with_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
