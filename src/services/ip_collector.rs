use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::models::{CORE_DESCRIPTOR_EXT, DEFAULT_DESTINATION, DEFAULT_SOURCE};
use crate::services::CollectReport;
use crate::utils::{copy_filtered_subdirs, create_fresh_dir};

/// Configuration for an IP-core collection run
#[derive(Debug, Clone)]
pub struct IpCollectorConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Default for IpCollectorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}

/// Collect IP-core descriptor files out of the immediate subdirectories of
/// the source root.
///
/// The destination root is created fresh and must not already exist. Each
/// source subdirectory is mirrored under the destination; only its files
/// with the descriptor extension are carried over. Non-directory entries at
/// the top level are skipped.
pub fn collect_ip_cores(config: &IpCollectorConfig) -> Result<CollectReport> {
    info!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        "Starting IP-core collection"
    );

    create_fresh_dir(&config.destination).with_context(|| {
        format!(
            "Failed to initialize destination {}",
            config.destination.display()
        )
    })?;

    let (dirs_created, files_copied, files_skipped) =
        copy_filtered_subdirs(&config.source, &config.destination, CORE_DESCRIPTOR_EXT)
            .with_context(|| {
                format!("Failed to collect IP cores from {}", config.source.display())
            })?;

    let report = CollectReport {
        dirs_created: dirs_created + 1,
        files_copied,
        files_skipped,
    };

    info!(
        "IP-core collection completed. Copied: {}, Skipped: {}",
        report.files_copied, report.files_skipped
    );

    Ok(report)
}
