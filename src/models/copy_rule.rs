/// File extension of a generated IP-core descriptor
pub const CORE_DESCRIPTOR_EXT: &str = "xci";

/// File extension of a Vivado project file
pub const PROJECT_FILE_EXT: &str = "xpr";

/// Subdirectory of the design sources holding generated IP cores
pub const IP_CONTAINER_DIR: &str = "xilinx_ip";

/// Source root used when no path is given on the command line
pub const DEFAULT_SOURCE: &str = ".";

/// Destination root used when no path is given on the command line
pub const DEFAULT_DESTINATION: &str = "../copy";

/// How one project subtree is carried over into the destination tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyRule {
    /// Recursive copy of the whole subtree, nothing filtered
    Verbatim,
    /// Top-level files copied as-is; directories one level deeper keep only
    /// files with the given extension
    ShallowThenFiltered { extension: &'static str },
    /// Everything copied verbatim except one named container directory, whose
    /// grandchild files are filtered by extension
    VerbatimExceptContainer {
        container: &'static str,
        extension: &'static str,
    },
}

/// A named subtree of the project root paired with its copy rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtreeRule {
    pub name: &'static str,
    pub rule: CopyRule,
}

/// The three subtrees a project collection run carries over, in the order
/// they are processed. The subtree names are load-bearing: they match the
/// directory layout of the source project and of the resulting destination.
pub const PROJECT_RULES: [SubtreeRule; 3] = [
    SubtreeRule {
        name: "testbench",
        rule: CopyRule::Verbatim,
    },
    SubtreeRule {
        name: "run_vivado",
        rule: CopyRule::ShallowThenFiltered {
            extension: PROJECT_FILE_EXT,
        },
    },
    SubtreeRule {
        name: "rtl",
        rule: CopyRule::VerbatimExceptContainer {
            container: IP_CONTAINER_DIR,
            extension: CORE_DESCRIPTOR_EXT,
        },
    },
];
