use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;
mod ui;

use cli::Cli;
use cli::app::Commands;
use object_xlsx::{config, convert, metadata, workbook};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("object_xlsx=info"),
    );
    if let Some(path) = &cli.log_file {
        // Truncate on each run
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        logger.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    logger.init();

    info!("Starting object-xlsx");

    match cli.command {
        Commands::Convert(args) => cli::commands::handle_convert_command(args)?,
        Commands::Interactive(args) => cli::commands::handle_interactive_command(args)?,
        Commands::Inspect(args) => cli::commands::handle_inspect_command(args)?,
    }

    Ok(())
}
