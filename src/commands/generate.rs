//! Gen command implementation
//!
//! Loads an OpenAPI document and writes a raxtest scenario file together
//! with its fixture data file.

use crate::converters::{ConvertOptions, Converter, RaxtestConverter, ScenarioBundle};
use crate::error::Result;
use crate::extractor::extract_endpoints;
use crate::loader::{ApiDocument, load_openapi};
use crate::render::render_bundle;
use colored::Colorize;
use std::path::Path;

/// Arguments for the gen command
#[derive(Debug, Clone)]
pub struct GenCommandArgs<'a> {
    pub input_path: &'a Path,
    pub output_path: &'a Path,
    pub data_path: &'a Path,
    pub base_url: &'a str,
}

/// Run extraction and assembly on a loaded document
pub fn generate_bundle(document: &ApiDocument, options: &ConvertOptions) -> Result<ScenarioBundle> {
    let endpoints = extract_endpoints(document)?;
    Ok(RaxtestConverter::new().convert(&endpoints, options))
}

/// Execute the gen command
pub fn execute_gen(args: GenCommandArgs<'_>) -> Result<()> {
    println!("{} Input file: {}", "→".blue(), args.input_path.display());
    println!("{} Output file: {}", "→".blue(), args.output_path.display());
    println!("{} Data file: {}", "→".blue(), args.data_path.display());
    println!("{} Server: {}", "→".blue(), args.base_url);
    println!();

    let document = load_openapi(args.input_path)?;
    println!(
        "{} Loaded OpenAPI file: {} ({} paths)",
        "✓".green(),
        document.spec.info.title.bold(),
        document.path_count()
    );

    let options = ConvertOptions::for_data_path(args.base_url, args.data_path);
    let bundle = generate_bundle(&document, &options)?;
    let step_count = bundle.scenario.all_steps().count();
    println!(
        "{} Generated {} steps in {} categories",
        "✓".green(),
        step_count,
        bundle.scenario.categories.len()
    );

    render_bundle(&bundle, args.output_path, args.data_path)?;
    println!(
        "{} Wrote scenario: {}",
        "✓".green(),
        args.output_path.display()
    );
    println!("{} Wrote fixtures: {}", "✓".green(), args.data_path.display());

    println!("\n{}", "Done! Please check the output files.".green().bold());

    Ok(())
}
