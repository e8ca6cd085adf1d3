//! End-to-end CLI tests for chatstats.
//!
//! These tests run the actual binary with various arguments and check the
//! report it prints or writes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
01/03/24, 20:00 - Alice: Ciao! stasera pizza?
01/03/24, 20:02 - Bob: sì, pizza 🍕
alle nove
01/03/24, 20:03 - Bob: porto la birra
02/03/24, 09:15 - Alice: buongiorno pizza
02/03/24, 09:20 - Carol: ciao a tutti
";

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(
        dir.path().join("malformed.txt"),
        "01/03/24, 20:00 - Alice: ok\n45/03/24, 20:00 - Bob: broken\n",
    )
    .unwrap();
    fs::write(dir.path().join("stopwords.txt"), "# extra\npizza\n").unwrap();

    dir
}

fn chatstats_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstats"));
    Command::from_std(cmd)
}

fn input_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_text_report_to_stdout() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(input_path(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Total messages: 5"))
            .stdout(predicate::str::contains("Bob: 0:02:00"))
            .stdout(predicate::str::contains("Top words of Alice:"))
            .stdout(predicate::str::contains("pizza (2)"));
    }

    #[test]
    fn test_json_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "stats.json");

        chatstats_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-f",
                "json",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        let v: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(v["total_messages"], 5);
        assert_eq!(v["message_counts"]["Bob"], 2);
        assert_eq!(v["response_times_seconds"]["Bob"], 120.0);
        assert_eq!(v["word_stats"]["Bob"]["sum"], 8);
        assert_eq!(v["hourly"]["20"], 3);
        assert_eq!(v["daily"]["2024-03-02"], 2);
        assert_eq!(v["conversation_starts"]["Alice"], 2);
        assert_eq!(v["top_words"][1]["sender"], "Bob");
    }

    #[test]
    fn test_csv_to_stdout() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "--format", "csv"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Table;Sender;Key;Value"))
            .stdout(predicate::str::contains("messages;Carol;count;1"))
            .stdout(predicate::str::contains("top_words;Alice;pizza;2"));
    }
}

// ============================================================================
// Option Tests
// ============================================================================

mod options {
    use super::*;

    #[test]
    fn test_gap_option() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-f",
                "csv",
                "--gap",
                "1",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("conversation_starts;Bob;count;1"))
            .stdout(predicate::str::contains("conversation_starts;Carol;count;1"));
    }

    #[test]
    fn test_top_option() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "-f", "csv", "--top", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("top_words;Alice;pizza;2"))
            .stdout(predicate::str::contains("top_words;Alice;stasera").not());
    }

    #[test]
    fn test_extra_stopwords() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-f",
                "csv",
                "--stopwords",
                &input_path(&fixtures, "stopwords.txt"),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(";pizza;").not())
            .stdout(predicate::str::contains("top_words;Alice;stasera;1"));
    }

    #[test]
    fn test_no_default_stopwords() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-f",
                "csv",
                "--no-default-stopwords",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("top_words;Bob;la;1"))
            .stdout(predicate::str::contains("top_words;Bob;sì;1"));
    }

    #[test]
    fn test_date_and_sender_filters() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-f",
                "csv",
                "--after",
                "2024-03-02",
                "--from",
                "carol",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("summary;;total_messages;1"))
            .stdout(predicate::str::contains("messages;Carol;count;1"))
            .stdout(predicate::str::contains("messages;Alice").not());
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "-v"])
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("parsed transcript"))
            .stdout(predicate::str::contains("Total messages: 5"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input() {
        chatstats_cmd()
            .arg("/definitely/not/here.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_malformed_timestamp() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(input_path(&fixtures, "malformed.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("line 2"))
            .stderr(predicate::str::contains("45/03/24"));
    }

    #[test]
    fn test_invalid_date_filter() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "--after", "03/02/2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_missing_stopword_file() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "--stopwords",
                "/no/such/list.txt",
            ])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_unknown_format_rejected() {
        chatstats_cmd()
            .args(["chat.txt", "-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("xml"));
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&input_path(&fixtures, "empty.txt"), "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"total_messages\": 0"));
    }

    #[test]
    fn test_help() {
        chatstats_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--gap"))
            .stdout(predicate::str::contains("--stopwords"));
    }
}
