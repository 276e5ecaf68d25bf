use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;
use vivado_collect::{
    collect_project, initialize_logging, CollectReport, ProjectCollectorConfig,
    DEFAULT_DESTINATION, DEFAULT_SOURCE,
};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("collect-proj")
        .version("1.0")
        .about("Copy the testbench, run_vivado and rtl subtrees of a Vivado project")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .help("Project root to copy from (defaults to the current directory)")
                .requires("destination"),
        )
        .arg(
            Arg::new("destination")
                .value_name("DESTINATION")
                .help("Destination root to copy into (must be given together with SOURCE)"),
        )
        .get_matches();

    let log_level = matches.get_one::<String>("log-level").unwrap();
    initialize_logging(log_level)?;

    let config = create_config(&matches);
    info!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        "resolved project roots"
    );

    let report = collect_project(&config)?;
    print_report(&report);

    Ok(())
}

/// Build the run configuration from CLI arguments, falling back to the
/// default roots when no paths were given
fn create_config(matches: &ArgMatches) -> ProjectCollectorConfig {
    let source = matches
        .get_one::<String>("source")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));

    let destination = matches
        .get_one::<String>("destination")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION));

    ProjectCollectorConfig {
        source,
        destination,
    }
}

/// Print the run summary
fn print_report(report: &CollectReport) {
    info!("=== PROJECT COLLECT REPORT ===");
    info!("Directories created: {}", report.dirs_created);
    info!("Files copied: {}", report.files_copied);
    info!("Files skipped by filters: {}", report.files_skipped);
}
