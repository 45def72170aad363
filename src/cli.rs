use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "raxtest-gen")]
#[command(version)]
#[command(about = "Create raxtest scenario files from OpenAPI documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a scenario file and its fixture data file
    ///
    /// Every ordinary endpoint is tested once without logging in and once
    /// per login endpoint. Add entries to the arrays in the data file to
    /// run a step with more than one data set.
    Gen {
        /// Path to OpenAPI file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output scenario YAML file
        #[arg(short, long)]
        output: PathBuf,

        /// Output fixture data JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Base URL of the server under test
        #[arg(short, long)]
        server: String,
    },

    /// List endpoints of an OpenAPI file grouped by role
    List {
        /// Path to OpenAPI file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}
