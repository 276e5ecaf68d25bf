use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vivado_collect::{collect_project, FileOpError, ProjectCollectorConfig};

/// Helper to build a config over sandboxed source/destination roots
fn config_in(tmp: &TempDir) -> ProjectCollectorConfig {
    ProjectCollectorConfig {
        source: tmp.path().join("proj"),
        destination: tmp.path().join("copy"),
    }
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Lay down a representative project tree under the source root
fn build_project(source: &Path) {
    write_file(&source.join("testbench/tb_top.sv"), "module tb_top;");
    write_file(&source.join("testbench/waves/dump.vcd"), "$dumpvars");

    write_file(&source.join("run_vivado/build.tcl"), "launch_runs impl_1");
    write_file(&source.join("run_vivado/proj/impl.xpr"), "<project/>");
    write_file(&source.join("run_vivado/proj/impl.log"), "synthesis log");

    write_file(&source.join("rtl/top.v"), "module top;");
    write_file(&source.join("rtl/common/fifo.v"), "module fifo;");
    write_file(&source.join("rtl/xilinx_ip/coreA/coreA.xci"), "<xci/>");
    write_file(&source.join("rtl/xilinx_ip/coreA/coreA.dcp"), "checkpoint");
    write_file(&source.join("rtl/xilinx_ip/notes.txt"), "notes");
}

#[test]
fn test_testbench_subtree_round_trips_verbatim() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    build_project(&config.source);

    collect_project(&config).unwrap();

    let src_tb = config.source.join("testbench");
    let dest_tb = config.destination.join("testbench");
    assert_eq!(
        fs::read(src_tb.join("tb_top.sv")).unwrap(),
        fs::read(dest_tb.join("tb_top.sv")).unwrap()
    );
    assert_eq!(
        fs::read(src_tb.join("waves/dump.vcd")).unwrap(),
        fs::read(dest_tb.join("waves/dump.vcd")).unwrap()
    );
}

#[test]
fn test_build_tool_subtree_keeps_top_files_and_filters_depth_two() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    build_project(&config.source);

    collect_project(&config).unwrap();

    let dest_rv = config.destination.join("run_vivado");
    assert_eq!(
        fs::read_to_string(dest_rv.join("build.tcl")).unwrap(),
        "launch_runs impl_1"
    );
    assert!(dest_rv.join("proj/impl.xpr").exists());
    assert!(!dest_rv.join("proj/impl.log").exists());
}

#[test]
fn test_design_sources_filter_applies_only_inside_container() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    build_project(&config.source);

    collect_project(&config).unwrap();

    let dest_rtl = config.destination.join("rtl");
    assert!(dest_rtl.join("top.v").exists());
    assert!(dest_rtl.join("common/fifo.v").exists());

    assert!(dest_rtl.join("xilinx_ip/coreA/coreA.xci").exists());
    assert!(!dest_rtl.join("xilinx_ip/coreA/coreA.dcp").exists());
    // A file directly under the container is not carried over
    assert!(!dest_rtl.join("xilinx_ip/notes.txt").exists());
}

#[test]
fn test_report_counts_cover_all_three_subtrees() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    build_project(&config.source);

    let report = collect_project(&config).unwrap();

    // testbench, waves, run_vivado, proj, rtl, common, coreA
    assert_eq!(report.dirs_created, 7);
    // tb_top.sv, dump.vcd, build.tcl, impl.xpr, top.v, fifo.v, coreA.xci
    assert_eq!(report.files_copied, 7);
    // impl.log, coreA.dcp
    assert_eq!(report.files_skipped, 2);
    assert_eq!(report.total_seen(), 9);
}

#[test]
fn test_fails_when_testbench_destination_exists() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);
    build_project(&config.source);
    write_file(&config.destination.join("testbench/keep.txt"), "pre-existing");

    let err = collect_project(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FileOpError>(),
        Some(FileOpError::DestinationExists(_))
    ));

    // Pre-existing destination content is untouched and later subtrees were
    // never started
    let keep = fs::read_to_string(config.destination.join("testbench/keep.txt")).unwrap();
    assert_eq!(keep, "pre-existing");
    assert!(!config.destination.join("run_vivado").exists());
    assert!(!config.destination.join("rtl").exists());
}

#[test]
fn test_missing_subtree_aborts_but_keeps_earlier_copies() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);

    // A project with only a testbench: the run_vivado step must fail
    write_file(&config.source.join("testbench/tb_top.sv"), "module tb_top;");

    let err = collect_project(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FileOpError>(),
        Some(FileOpError::MissingSource(_))
    ));

    // The already-copied subtree stays in place
    assert!(config.destination.join("testbench/tb_top.sv").exists());
}

#[test]
fn test_container_materializes_only_with_directory_children() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(&tmp);

    write_file(&config.source.join("testbench/tb_top.sv"), "module tb_top;");
    write_file(&config.source.join("run_vivado/build.tcl"), "launch_runs");
    write_file(&config.source.join("rtl/top.v"), "module top;");
    // Only a stray file under the container, no core directories
    write_file(&config.source.join("rtl/xilinx_ip/notes.txt"), "notes");

    collect_project(&config).unwrap();

    assert!(config.destination.join("rtl/top.v").exists());
    assert!(!config.destination.join("rtl/xilinx_ip").exists());
}

#[test]
fn test_default_roots_are_cwd_and_sibling_copy() {
    let config = ProjectCollectorConfig::default();
    assert_eq!(config.source, PathBuf::from("."));
    assert_eq!(config.destination, PathBuf::from("../copy"));
}
