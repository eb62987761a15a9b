use anyhow::Result;
use catalog_seeker_cli::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    catalog_seeker_cli::initialize_tracing(cli.log_level);

    let output = catalog_seeker_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
