use clap::Parser;
use infra_helpers::config::EXAMPLE_INVENTORY_PATH;
use infra_helpers::inventory::check_file;
use infra_helpers::utils::logger;
use infra_helpers::CheckerArgs;

fn main() -> anyhow::Result<()> {
    let _args = CheckerArgs::parse();

    logger::init_cli_logger(env!("CARGO_CRATE_NAME"), false);
    tracing::info!("Checking {}", EXAMPLE_INVENTORY_PATH);

    let report = match check_file(EXAMPLE_INVENTORY_PATH) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!("Failed to load {}: {}", EXAMPLE_INVENTORY_PATH, e);
            println!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    for line in report.lines() {
        println!("{}", line);
    }

    if !report.is_pass() {
        tracing::debug!(
            "{} structural violation(s) in {}",
            report.violations().len(),
            EXAMPLE_INVENTORY_PATH
        );
        std::process::exit(report.exit_code());
    }

    Ok(())
}
