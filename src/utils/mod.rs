pub mod file_operations;

pub use file_operations::{
    copy_file, copy_filtered_subdirs, copy_matching_files, copy_tree, create_fresh_dir,
    file_extension, has_extension, read_dir_sorted, FileOpError,
};
