pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::{
    CopyRule, SubtreeRule, CORE_DESCRIPTOR_EXT, DEFAULT_DESTINATION, DEFAULT_SOURCE,
    IP_CONTAINER_DIR, PROJECT_FILE_EXT, PROJECT_RULES,
};
pub use services::{
    collect_ip_cores, collect_project, CollectReport, IpCollectorConfig, ProjectCollectorConfig,
};
pub use utils::FileOpError;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging with tracing
///
/// Shared by both binaries; progress lines go to standard output.
pub fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
