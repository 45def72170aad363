use crate::models::{EndpointSpec, ParamSpec};
use crate::{Result, extractor, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(input_path: &Path) -> Result<()> {
    println!("{}", "Loading OpenAPI file...".bright_blue());
    println!("  Path: {}", input_path.display());

    let document = loader::load_openapi(input_path)?;

    println!("\n{}", "✓ OpenAPI loaded successfully".green());
    println!("  Title: {}", document.spec.info.title.bold());
    println!("  Version: {}", document.spec.info.version);
    println!("  OpenAPI Version: {}", document.spec.openapi);
    println!();

    let endpoints = extractor::extract_endpoints(&document)?;

    if endpoints.total() == 0 {
        println!("{}", "No paths found".yellow());
        return Ok(());
    }

    print_group("Login endpoints", &endpoints.login);
    print_group("Logout endpoints", &endpoints.logout);
    print_group("Ordinary endpoints", &endpoints.ordinary);

    Ok(())
}

fn print_group(title: &str, endpoints: &[EndpointSpec]) {
    println!("{}", format!("{} ({}):", title, endpoints.len()).bold());

    for endpoint in endpoints {
        println!(
            "  {} {}",
            endpoint.display_name.bright_cyan(),
            endpoint.path
        );

        for method in &endpoint.methods {
            println!("    {}", endpoint.step_name(method).bright_yellow());

            if method.has_query() {
                println!("      Query: {}", describe(&method.queries));
            }
            if method.has_body() {
                println!("      Body: {}", describe(&method.bodies));
            }
        }
    }

    println!();
}

fn describe(params: &[ParamSpec]) -> String {
    params
        .iter()
        .map(|p| format!("{} ({})", p.name, p.kind))
        .collect::<Vec<_>>()
        .join(", ")
}
