#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("weekgrid").expect("binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn write_tasks(&self, filename: &str, content: &str) -> PathBuf {
        let p = self.dir.path().join(filename);
        fs::write(&p, content).expect("write task file");
        p
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

const SAMPLE: &str = "\
Meeting, Monday, 09:00 - 10:30, #FF0000
Study at home, Tuesday, 14:00 - 16:00, red
";

// ─── render ────────────────────────────────────────────────────────

#[test]
fn render_writes_png_for_valid_file() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", SAMPLE);

    let v = env.run_ok(&["render", "tasks.txt", "--out", "week.png"]);
    assert_eq!(v["data"]["tasks"], 2);

    let png = env.path("week.png");
    assert!(png.exists());
    assert!(fs::metadata(&png).unwrap().len() > 0);
}

#[test]
fn render_without_file_produces_empty_grid() {
    let env = TestEnv::new();
    let v = env.run_ok(&["render", "--out", "empty.png"]);
    assert_eq!(v["data"]["tasks"], 0);
    assert!(env.path("empty.png").exists());
}

#[test]
fn render_default_path_lands_in_outputs_dir() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", SAMPLE);
    let v = env.run_ok(&["render", "tasks.txt"]);

    let reported = v["data"]["path"].as_str().expect("path in response");
    assert!(reported.starts_with("outputs"), "{reported}");
    assert!(env.path(reported).exists());
}

#[test]
fn render_malformed_file_fails_without_output() {
    let env = TestEnv::new();
    env.write_tasks(
        "tasks.txt",
        "Meeting, Monday, 09:00 - 10:30, red\nMeeting, Funday, 9:00-10:00, red\n",
    );

    let v = env.run_err(&["render", "tasks.txt", "--out", "week.png"]);
    assert_eq!(v["error"]["code"], "IMPORT_PARSE");
    assert_eq!(v["error"]["line"], 2);
    assert!(!env.path("week.png").exists());
}

#[test]
fn render_missing_file_reports_io_error() {
    let env = TestEnv::new();
    let v = env.run_err(&["render", "nope.txt", "--out", "week.png"]);
    assert_eq!(v["error"]["code"], "IO");
}

#[test]
fn render_text_mode_prints_destination() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", SAMPLE);
    env.cmd()
        .args(["render", "tasks.txt", "--out", "week.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("week.png"));
}

// ─── list ──────────────────────────────────────────────────────────

#[test]
fn list_prints_tasks_in_store_order() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", SAMPLE);
    env.cmd()
        .args(["list", "tasks.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Meeting, Monday, 09:00 - 10:30, #ff0000",
        ))
        .stdout(predicate::str::contains(
            "2. Study at home, Tuesday, 14:00 - 16:00, #ff0000",
        ));
}

#[test]
fn list_json_normalizes_fields() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", SAMPLE);
    let v = env.run_ok(&["list", "tasks.txt"]);
    let tasks = v["data"]["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["name"], "Meeting");
    assert_eq!(tasks[0]["day"], "Monday");
    assert_eq!(tasks[0]["start"], "09:00");
    assert_eq!(tasks[1]["color"], "#ff0000");
}

#[test]
fn list_malformed_file_reports_offending_line() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", "Meeting, Monday, 25:00 - 26:00, red\n");
    env.cmd()
        .args(["list", "tasks.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 1"));
}

// ─── export ────────────────────────────────────────────────────────

#[test]
fn export_emits_canonical_lines() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", "  Meeting , mon ,  09:00-10:30 , RED \n");
    env.cmd()
        .args(["export", "tasks.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Meeting, Monday, 09:00 - 10:30, #ff0000\n",
        ));
}

#[test]
fn export_round_trips_through_import() {
    let env = TestEnv::new();
    env.write_tasks("tasks.txt", SAMPLE);
    let first = env.cmd().args(["export", "tasks.txt"]).output().expect("run");
    assert!(first.status.success());

    env.write_tasks("canonical.txt", &String::from_utf8_lossy(&first.stdout));
    let second = env
        .cmd()
        .args(["export", "canonical.txt"])
        .output()
        .expect("run");
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
