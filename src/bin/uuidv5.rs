use clap::Parser;
use infra_helpers::utils::{logger, validation::Validate};
use infra_helpers::{uuidv5, Uuidv5Args};

fn main() -> anyhow::Result<()> {
    let args = Uuidv5Args::parse();

    logger::init_cli_logger(env!("CARGO_CRATE_NAME"), args.verbose);
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::debug!("Argument validation failed: {}", e);
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    let uuid = uuidv5(&args.name, &args.resolved_namespace())?;
    println!("{}", uuid);

    Ok(())
}
