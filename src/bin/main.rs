use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tinyjava::parser::parse_java;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "tinyjava")]
#[command(about = "Tiny Java Parser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a .java file and show the AST
    Parse {
        /// Input .java file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show detailed AST information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Parse every .java file under a directory and report failures
    Check {
        /// Directory to scan
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { input, detailed } => {
            parse_file(input, *detailed)?;
        }
        Commands::Check { dir } => {
            check_directory(dir)?;
        }
    }

    Ok(())
}

fn parse_file(input: &Path, detailed: bool) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let unit = parse_java(&source)?;

    if detailed {
        println!("{:#?}", unit);
    } else {
        println!("{}", unit);
    }

    Ok(())
}

fn check_directory(dir: &Path) -> Result<()> {
    let mut total = 0usize;
    let mut failed = 0usize;

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("java") {
            continue;
        }

        total += 1;
        let source = fs::read_to_string(entry.path())?;
        if let Err(error) = parse_java(&source) {
            failed += 1;
            eprintln!("{}: {}", entry.path().display(), error);
        }
    }

    println!("{} files checked, {} failed", total, failed);
    if failed > 0 {
        anyhow::bail!("{} files failed to parse", failed);
    }

    Ok(())
}
