mod commands;
mod reader;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ariacheck",
    version,
    about = "ariacheck — report misspelled and unknown ARIA attribute names"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check element descriptor files and report diagnostics
    Check {
        /// Input path (file or directory, defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default), json or sarif
        #[arg(long, default_value = "human")]
        format: String,

        /// Exit with status 1 when any diagnostic is reported
        #[arg(long)]
        deny: bool,
    },

    /// List the known ARIA attribute names
    Known {
        /// Directory holding ariacheck.config.yaml (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path, format, deny } => {
            match commands::check::run_check(&path, &format) {
                Ok(report) => {
                    println!("{}", report.output);
                    if deny && report.diagnostic_count > 0 {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Known { path } => match commands::known::run_known(&path) {
            Ok(output) => {
                println!("{output}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }
}
