pub mod copy_rule;

pub use copy_rule::{
    CopyRule, SubtreeRule, CORE_DESCRIPTOR_EXT, DEFAULT_DESTINATION, DEFAULT_SOURCE,
    IP_CONTAINER_DIR, PROJECT_FILE_EXT, PROJECT_RULES,
};
