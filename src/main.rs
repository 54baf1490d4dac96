use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use csdl_compare::compare::report;
use csdl_compare::{
    canonicalize_csdl_path, compare_csdl_paths, CompareOptions, CompareOutcome, EdmVersion,
    NormalizeOptions,
};

#[derive(Parser)]
#[command(name = "csdl-compare")]
#[command(author, version, about = "Canonicalize and compare CSDL schema documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two CSDL files (or directories of files) for structural equivalence
    Compare {
        /// Expected-side CSDL file or directory
        #[arg(short, long)]
        expected: PathBuf,

        /// Actual-side CSDL file or directory
        #[arg(short, long)]
        actual: PathBuf,

        /// Target CSDL version (4.0 or 4.01)
        #[arg(long, default_value = "4.0")]
        csdl_version: EdmVersion,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the canonical form of a CSDL document
    Canon {
        /// CSDL file or directory
        file: PathBuf,

        /// Target CSDL version (4.0 or 4.01)
        #[arg(long, default_value = "4.0")]
        csdl_version: EdmVersion,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            expected,
            actual,
            csdl_version,
            verbose,
        } => {
            let options = CompareOptions {
                expected_path: expected,
                actual_path: actual,
                version: csdl_version,
                normalize: NormalizeOptions::default(),
                verbose,
            };

            match compare_csdl_paths(options)? {
                CompareOutcome::Equivalent => println!("OK (equivalent)"),
                CompareOutcome::Different(err) => {
                    report::print_failure(&err);
                    std::process::exit(1);
                }
            }
        }
        Commands::Canon { file, csdl_version } => {
            let documents =
                canonicalize_csdl_path(&file, &NormalizeOptions::default(), csdl_version)?;
            for document in documents {
                println!("{document}");
            }
        }
    }

    Ok(())
}
