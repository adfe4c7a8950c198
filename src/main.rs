use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use forest_stand_loader::{
    io::read_csv,
    visualization::{print_input_guide, print_record_table, print_species_guide, print_status_guide},
};

#[derive(Parser)]
#[command(
    name = "stand-loader",
    about = "Forest Stand Loader - tree plot data ingestion and validation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a tree data table and echo the validated records
    Load {
        /// Path to the input CSV file
        #[arg(short, long, default_value = "tree_data.csv")]
        input: PathBuf,

        /// Suppress the record table echo
        #[arg(long)]
        no_echo: bool,
    },

    /// Show the expected input format and the species/status code tables
    Guide,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Load { input, no_echo } => {
            println!(
                "\n{}",
                format!("Importing tree data: {}", input.display())
                    .bold()
                    .cyan()
            );

            let records = read_csv(&input)?;

            if !no_echo {
                print_record_table(&records);
            }

            let alive = records.iter().filter(|r| r.is_alive()).count();
            println!(
                "\n  Loaded {} tree records ({} alive)",
                records.len(),
                alive
            );
        }

        Commands::Guide => {
            print_input_guide();
            print_species_guide();
            print_status_guide();
        }
    }

    Ok(())
}
