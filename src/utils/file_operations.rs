use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Failure of a low-level copy primitive.
///
/// Every variant is fatal to the run; callers propagate these unrecovered.
#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error("Missing source directory: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("Filesystem error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileOpError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Extension of a file name: its last dot-delimited segment
/// Pure function; a name without a dot is its own extension
pub fn file_extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Check if a file name carries the given extension
/// Pure function
pub fn has_extension(name: &str, extension: &str) -> bool {
    file_extension(name) == extension
}

/// Read a directory and collect its entries sorted by name.
///
/// A missing directory surfaces as [`FileOpError::MissingSource`] so callers
/// report the absent subtree rather than a bare I/O error.
pub fn read_dir_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>, FileOpError> {
    let iter = fs::read_dir(dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpError::MissingSource(dir.to_path_buf()),
        _ => FileOpError::io(dir, e),
    })?;

    let mut entries = iter
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FileOpError::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

/// Create `path` as a fresh directory, creating missing parents but refusing
/// to reuse a directory that is already present.
pub fn create_fresh_dir<P: AsRef<Path>>(path: P) -> Result<(), FileOpError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| FileOpError::io(parent, e))?;
        }
    }

    match fs::create_dir(path) {
        Ok(()) => {
            info!(path = %path.display(), "created");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(FileOpError::DestinationExists(path.to_path_buf()))
        }
        Err(e) => Err(FileOpError::io(path, e)),
    }
}

/// Copy a single file byte-for-byte, keeping its permissions.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<(), FileOpError> {
    let src_path = source.as_ref();
    let dest_path = destination.as_ref();

    fs::copy(src_path, dest_path).map_err(|e| FileOpError::io(dest_path, e))?;
    info!(path = %dest_path.display(), "copied");
    Ok(())
}

/// Recursive verbatim copy of a whole subtree.
///
/// Missing parents of `destination` are created, but `destination` itself
/// must not already exist. Returns `(directories_created, files_copied)`.
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<(usize, usize), FileOpError> {
    let src_path = source.as_ref();
    let dest_path = destination.as_ref();

    if !src_path.is_dir() {
        return Err(FileOpError::MissingSource(src_path.to_path_buf()));
    }

    create_fresh_dir(dest_path)?;
    let mut dirs_created = 1;
    let mut files_copied = 0;
    copy_tree_children(src_path, dest_path, &mut dirs_created, &mut files_copied)?;
    Ok((dirs_created, files_copied))
}

fn copy_tree_children(
    source_dir: &Path,
    dest_dir: &Path,
    dirs_created: &mut usize,
    files_copied: &mut usize,
) -> Result<(), FileOpError> {
    for entry in read_dir_sorted(source_dir)? {
        let path = entry.path();
        let target = dest_dir.join(entry.file_name());

        if path.is_dir() {
            create_fresh_dir(&target)?;
            *dirs_created += 1;
            copy_tree_children(&path, &target, dirs_created, files_copied)?;
        } else {
            copy_file(&path, &target)?;
            *files_copied += 1;
        }
    }

    Ok(())
}

/// Copy the files of `source_dir` whose extension matches into
/// `destination_dir`, one level only. Everything else at that depth is
/// skipped. Returns `(files_copied, files_skipped)`.
pub fn copy_matching_files<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    destination_dir: Q,
    extension: &str,
) -> Result<(usize, usize), FileOpError> {
    let src_dir = source_dir.as_ref();
    let dest_dir = destination_dir.as_ref();

    let mut files_copied = 0;
    let mut files_skipped = 0;

    for entry in read_dir_sorted(src_dir)? {
        let path = entry.path();
        let name = entry.file_name();

        if path.is_file() && has_extension(&name.to_string_lossy(), extension) {
            copy_file(&path, dest_dir.join(&name))?;
            files_copied += 1;
        } else {
            debug!(path = %path.display(), "filtered out");
            files_skipped += 1;
        }
    }

    Ok((files_copied, files_skipped))
}

/// Two-level filtered copy: mirror each subdirectory of `source_dir` under
/// `destination_dir` and copy only the matching files inside it.
///
/// Non-directory entries at the top level are skipped without being counted.
/// Destination directories are created with their parents, so
/// `destination_dir` itself materializes with the first subdirectory.
/// Returns `(directories_created, files_copied, files_skipped)`.
pub fn copy_filtered_subdirs<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    destination_dir: Q,
    extension: &str,
) -> Result<(usize, usize, usize), FileOpError> {
    let src_dir = source_dir.as_ref();
    let dest_dir = destination_dir.as_ref();

    let mut dirs_created = 0;
    let mut files_copied = 0;
    let mut files_skipped = 0;

    for entry in read_dir_sorted(src_dir)? {
        let path = entry.path();
        if !path.is_dir() {
            debug!(path = %path.display(), "not a directory, skipped");
            continue;
        }

        let target = dest_dir.join(entry.file_name());
        fs::create_dir_all(&target).map_err(|e| FileOpError::io(&target, e))?;
        info!(path = %target.display(), "created");
        dirs_created += 1;

        let (copied, skipped) = copy_matching_files(&path, &target, extension)?;
        files_copied += copied;
        files_skipped += skipped;
    }

    Ok((dirs_created, files_copied, files_skipped))
}
