use anyhow::Result;
use clap::{Arg, Command};
use tracing::info;
use vivado_collect::{collect_ip_cores, initialize_logging, CollectReport, IpCollectorConfig};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("collect-ip")
        .version("1.0")
        .about("Collect IP-core descriptor files out of the working directory")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .get_matches();

    let log_level = matches.get_one::<String>("log-level").unwrap();
    initialize_logging(log_level)?;

    // Always operates on the current directory
    let config = IpCollectorConfig::default();
    let report = collect_ip_cores(&config)?;
    print_report(&report);

    Ok(())
}

/// Print the run summary
fn print_report(report: &CollectReport) {
    info!("=== IP-CORE COLLECT REPORT ===");
    info!("Directories created: {}", report.dirs_created);
    info!("Files copied: {}", report.files_copied);
    info!("Files skipped by filter: {}", report.files_skipped);
}
