use anyhow::Context;
use clap::Parser;
use raxtest_gen::{
    cli::{Cli, Commands},
    commands::{self, GenCommandArgs},
    telemetry,
};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_telemetry();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            input,
            output,
            data,
            server,
        } => {
            commands::execute_gen(GenCommandArgs {
                input_path: &input,
                output_path: &output,
                data_path: &data,
                base_url: &server,
            })
            .context("scenario generation failed")?;
        }
        Commands::List { input } => {
            commands::execute_list(&input)
                .with_context(|| format!("failed to list endpoints of {}", input.display()))?;
        }
    }

    Ok(())
}
