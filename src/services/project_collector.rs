use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{CopyRule, DEFAULT_DESTINATION, DEFAULT_SOURCE, PROJECT_RULES};
use crate::services::CollectReport;
use crate::utils::{
    copy_file, copy_filtered_subdirs, copy_matching_files, copy_tree, create_fresh_dir,
    read_dir_sorted,
};

/// Configuration for a project collection run
#[derive(Debug, Clone)]
pub struct ProjectCollectorConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Default for ProjectCollectorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}

/// Carry the project subtrees into the destination tree, one rule at a time.
///
/// The subtrees and their rules come from [`PROJECT_RULES`]; each is
/// processed unconditionally and in order, and the first filesystem error
/// aborts the run. A failed run may leave the destination partially
/// populated.
pub fn collect_project(config: &ProjectCollectorConfig) -> Result<CollectReport> {
    info!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        "Starting project collection"
    );

    let mut report = CollectReport::default();

    for subtree in &PROJECT_RULES {
        let src_path = config.source.join(subtree.name);
        let dest_path = config.destination.join(subtree.name);
        apply_rule(&src_path, &dest_path, subtree.rule, &mut report)
            .with_context(|| format!("Failed to collect subtree {}", subtree.name))?;
    }

    info!(
        "Project collection completed. Copied: {}, Skipped: {}",
        report.files_copied, report.files_skipped
    );

    Ok(report)
}

/// Apply one copy rule to a source/destination subtree pair.
fn apply_rule(
    src_path: &Path,
    dest_path: &Path,
    rule: CopyRule,
    report: &mut CollectReport,
) -> Result<()> {
    match rule {
        CopyRule::Verbatim => {
            let (dirs_created, files_copied) = copy_tree(src_path, dest_path)?;
            report.dirs_created += dirs_created;
            report.files_copied += files_copied;
        }

        CopyRule::ShallowThenFiltered { extension } => {
            create_fresh_dir(dest_path)?;
            report.dirs_created += 1;

            for entry in read_dir_sorted(src_path)? {
                let path = entry.path();
                let target = dest_path.join(entry.file_name());

                if path.is_file() {
                    copy_file(&path, &target)?;
                    report.files_copied += 1;
                } else if path.is_dir() {
                    create_fresh_dir(&target)?;
                    report.dirs_created += 1;

                    let (copied, skipped) = copy_matching_files(&path, &target, extension)?;
                    report.files_copied += copied;
                    report.files_skipped += skipped;
                } else {
                    debug!(path = %path.display(), "special entry skipped");
                }
            }
        }

        CopyRule::VerbatimExceptContainer {
            container,
            extension,
        } => {
            create_fresh_dir(dest_path)?;
            report.dirs_created += 1;

            for entry in read_dir_sorted(src_path)? {
                let path = entry.path();
                let target = dest_path.join(entry.file_name());

                if entry.file_name() == container {
                    let (dirs_created, copied, skipped) =
                        copy_filtered_subdirs(&path, &target, extension)?;
                    report.dirs_created += dirs_created;
                    report.files_copied += copied;
                    report.files_skipped += skipped;
                } else if path.is_dir() {
                    let (dirs_created, files_copied) = copy_tree(&path, &target)?;
                    report.dirs_created += dirs_created;
                    report.files_copied += files_copied;
                } else {
                    copy_file(&path, &target)?;
                    report.files_copied += 1;
                }
            }
        }
    }

    Ok(())
}
