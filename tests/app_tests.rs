//! Exit-code and dump behaviour of the command-line driver.

use clap::Parser;
use dupscan::ExitCode;
use dupscan::ScanReport;
use dupscan::app::{run, validate_path};
use dupscan::cli::Cli;
use std::fs;
use tempfile::tempdir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["dupscan", "--quiet"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn missing_path_is_usage_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");
    let cli = parse(&["-p", missing.to_str().unwrap()]);
    assert_eq!(run(&cli), ExitCode::Usage);
}

#[test]
fn regular_file_path_is_usage_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"x").unwrap();
    let cli = parse(&["-p", file.to_str().unwrap()]);
    assert_eq!(run(&cli), ExitCode::Usage);
}

#[test]
fn scan_without_dump_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"same").unwrap();
    fs::write(dir.path().join("b"), b"same").unwrap();
    let cli = parse(&["-p", dir.path().to_str().unwrap()]);
    assert_eq!(run(&cli), ExitCode::Ok);
}

#[test]
fn json_to_stdout_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only"), b"1").unwrap();
    let cli = parse(&["-p", dir.path().to_str().unwrap(), "--json"]);
    assert_eq!(run(&cli), ExitCode::Ok);
}

#[test]
fn dump_writes_json_summary() {
    let tree = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(tree.path().join("a"), b"same").unwrap();
    fs::write(tree.path().join("b"), b"same").unwrap();
    fs::write(tree.path().join("c"), b"lonely").unwrap();

    let cli = parse(&[
        "-p",
        tree.path().to_str().unwrap(),
        "--dump",
        "--dump-dir",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(run(&cli), ExitCode::Ok);

    let report: ScanReport = serde_json::from_str(&fs::read_to_string(cli.dump_file()).unwrap()).unwrap();
    assert_eq!(report.files.len(), 3);
    assert_eq!(report.duplicate.len(), 1);
    let members = report.duplicate.values().next().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(report.path, validate_path(tree.path()).unwrap().to_string_lossy());
}

#[test]
fn unwritable_dump_is_cant_create() {
    let tree = tempdir().unwrap();
    let out = tempdir().unwrap();
    let missing = out.path().join("missing");
    let cli = parse(&[
        "-p",
        tree.path().to_str().unwrap(),
        "--dump",
        "--dump-dir",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(run(&cli), ExitCode::CantCreate);
}

#[test]
fn log_file_records_duplicate_groups() {
    let tree = tempdir().unwrap();
    let logs = tempdir().unwrap();
    fs::write(tree.path().join("a"), b"same").unwrap();
    fs::write(tree.path().join("b"), b"same").unwrap();

    let cli = parse(&[
        "-p",
        tree.path().to_str().unwrap(),
        "--logfile",
        "--log-dir",
        logs.path().to_str().unwrap(),
    ]);
    assert_eq!(run(&cli), ExitCode::Ok);

    let log = fs::read_to_string(logs.path().join("report.log")).unwrap();
    assert!(log.contains("Same files"));
    assert!(log.contains("Number of files: 2"));
}

#[test]
fn unopenable_log_file_is_config_error() {
    let tree = tempdir().unwrap();
    let logs = tempdir().unwrap();
    let missing = logs.path().join("missing");
    let cli = parse(&[
        "-p",
        tree.path().to_str().unwrap(),
        "--logfile",
        "--log-dir",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(run(&cli), ExitCode::Config);
}

#[test]
fn zero_chunk_size_is_config_error() {
    let tree = tempdir().unwrap();
    let cli = parse(&["-p", tree.path().to_str().unwrap(), "--chunk-size", "0"]);
    assert_eq!(run(&cli), ExitCode::Config);
}

#[test]
fn validated_path_is_absolute() {
    let dir = tempdir().unwrap();
    let resolved = validate_path(dir.path()).unwrap();
    assert!(resolved.is_absolute());
    assert!(validate_path(&dir.path().join("absent")).is_none());
}
