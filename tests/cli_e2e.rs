//! End-to-end CLI tests for chatstash.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! The `backup` subcommand needs a live clipboard and is not exercised here
//! (headless CI has no clipboard backend); its building blocks are covered
//! by unit tests and the `--help` checks below.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary backup directory with a few backup files.
fn setup_backups() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    fs::write(
        dir.path().join("backup_20240101_100000.md"),
        "*Backup created on: 2024-01-01 10:00:00*\nFirst conversation",
    )
    .unwrap();
    fs::write(
        dir.path().join("backup_20240101_110000.md"),
        "*Backup created on: 2024-01-01 11:00:00*\nSecond conversation",
    )
    .unwrap();
    fs::write(
        dir.path().join("backup_20240101_120000.md"),
        "*Backup created on: 2024-01-01 12:00:00*\nDoneFeedback has been submitted\nThird conversation",
    )
    .unwrap();

    dir
}

fn chatstash_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstash"));
    Command::from_std(cmd)
}

// ============================================================================
// Consolidate
// ============================================================================

mod consolidate {
    use super::*;

    #[test]
    fn test_basic_run() {
        let dir = setup_backups();

        chatstash_cmd()
            .args(["consolidate", "--dir", dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("Summary"))
            .stdout(predicate::str::contains("Files read:    3"));

        let output = dir.path().join("consolidated_conversation.md");
        assert!(output.exists());
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("First conversation"));
        assert!(content.contains("Second conversation"));
        assert!(content.contains("Third conversation"));
        assert!(!content.contains("DoneFeedback"));
    }

    #[test]
    fn test_newest_first_in_output() {
        let dir = setup_backups();

        chatstash_cmd()
            .args(["consolidate", "--dir", dir.path().to_str().unwrap()])
            .assert()
            .success();

        let content =
            fs::read_to_string(dir.path().join("consolidated_conversation.md")).unwrap();
        let third = content.find("Third conversation").unwrap();
        let second = content.find("Second conversation").unwrap();
        let first = content.find("First conversation").unwrap();
        assert!(third < second);
        assert!(second < first);
    }

    #[test]
    fn test_custom_output_name() {
        let dir = setup_backups();

        chatstash_cmd()
            .args([
                "consolidate",
                "--dir",
                dir.path().to_str().unwrap(),
                "-o",
                "merged.md",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("merged.md"));

        assert!(dir.path().join("merged.md").exists());
        assert!(!dir.path().join("consolidated_conversation.md").exists());
    }

    #[test]
    fn test_empty_directory_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();

        chatstash_cmd()
            .args(["consolidate", "--dir", dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing to do"));

        assert!(!dir.path().join("consolidated_conversation.md").exists());
    }

    #[test]
    fn test_missing_directory_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");

        chatstash_cmd()
            .args(["consolidate", "--dir", missing.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing to do"));
    }

    #[test]
    fn test_rerun_does_not_consume_own_output() {
        let dir = setup_backups();
        let dir_arg = dir.path().to_str().unwrap().to_string();

        chatstash_cmd()
            .args(["consolidate", "--dir", &dir_arg])
            .assert()
            .success();
        chatstash_cmd()
            .args(["consolidate", "--dir", &dir_arg])
            .assert()
            .success()
            // Still three source files on the second run
            .stdout(predicate::str::contains("Files found:   3"));

        let content =
            fs::read_to_string(dir.path().join("consolidated_conversation.md")).unwrap();
        assert_eq!(content.matches("First conversation").count(), 1);
    }

    #[test]
    fn test_strip_flag() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("backup_20240101_100000.md"),
            "*Backup created on: 2024-01-01 10:00:00*\nKeep me\nCustom badge text",
        )
        .unwrap();

        chatstash_cmd()
            .args([
                "consolidate",
                "--dir",
                dir.path().to_str().unwrap(),
                "--strip",
                "Custom badge",
            ])
            .assert()
            .success();

        let content =
            fs::read_to_string(dir.path().join("consolidated_conversation.md")).unwrap();
        assert!(content.contains("Keep me"));
        assert!(!content.contains("Custom badge text"));
    }

    #[test]
    fn test_skipped_file_warning() {
        let dir = setup_backups();
        fs::write(dir.path().join("backup_garbage.md"), [0xff_u8, 0xfe, 0x01]).unwrap();

        chatstash_cmd()
            .args(["consolidate", "--dir", dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stderr(predicate::str::contains("Skipped"))
            .stderr(predicate::str::contains("backup_garbage.md"));

        assert!(dir.path().join("consolidated_conversation.md").exists());
    }

    #[test]
    fn test_relative_default_dir() {
        // Default --dir is "backups" relative to the working directory
        let cwd = tempfile::tempdir().unwrap();
        fs::create_dir(cwd.path().join("backups")).unwrap();
        fs::write(
            cwd.path().join("backups").join("backup_20240101_100000.md"),
            "*Backup created on: 2024-01-01 10:00:00*\nFrom default dir",
        )
        .unwrap();

        chatstash_cmd()
            .current_dir(cwd.path())
            .args(["consolidate"])
            .assert()
            .success();

        let output = cwd
            .path()
            .join("backups")
            .join("consolidated_conversation.md");
        assert!(output.exists());
        assert!(fs::read_to_string(output).unwrap().contains("From default dir"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_subcommand() {
        chatstash_cmd().assert().failure();
    }

    #[test]
    fn test_unknown_subcommand() {
        chatstash_cmd().args(["explode"]).assert().failure();
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_backup_invalid_timestamp_override() {
        let dir = tempfile::tempdir().unwrap();

        chatstash_cmd()
            .args([
                "backup",
                "--dir",
                dir.path().to_str().unwrap(),
                "--at",
                "not-a-timestamp",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid timestamp"));
    }

    #[test]
    fn test_output_write_failure_is_fatal() {
        let dir = setup_backups();
        // A directory squatting on the output name forces the write to fail
        fs::create_dir(dir.path().join("consolidated_conversation.md")).unwrap();

        chatstash_cmd()
            .args(["consolidate", "--dir", dir.path().to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }
}

// ============================================================================
// Help and Version
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        chatstash_cmd()
            .args(["--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatstash"))
            .stdout(predicate::str::contains("consolidate"));
    }

    #[test]
    fn test_consolidate_help() {
        chatstash_cmd()
            .args(["consolidate", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--dir"))
            .stdout(predicate::str::contains("--strip"));
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_backup_help() {
        chatstash_cmd()
            .args(["backup", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--attempts"));
    }

    #[test]
    fn test_version_flag() {
        chatstash_cmd()
            .args(["--version"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatstash"))
            .stdout(predicate::str::contains("0."));
    }
}

// ============================================================================
// Output Format
// ============================================================================

#[test]
fn test_output_blocks_separated_by_rule() {
    let dir = setup_backups();

    chatstash_cmd()
        .args(["consolidate", "--dir", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("consolidated_conversation.md")).unwrap();
    let blocks: Vec<&str> = content.split("\n\n---\n\n").collect();
    assert_eq!(blocks.len(), 3);
    for block in blocks {
        assert!(block.starts_with("*Backup created on: "));
    }
}
