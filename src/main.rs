use clap::Parser;
use tracing_subscriber::EnvFilter;

use polyjoin::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("polyjoin=debug,info")
    } else {
        EnvFilter::new("polyjoin=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Join(args) => {
            cli::join::run(args, cli.verbose)?;
        }
        cli::Commands::PolygonTable(args) => {
            cli::polygon_table::run(args)?;
        }
    }

    Ok(())
}
