use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// A working directory with an `output/` directory of share files.
struct Workdir {
    dir: PathBuf,
}

impl Workdir {
    fn new(tag: &str, files: &[(&str, &str)]) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "share-verify-cli-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("output")).unwrap();
        for (name, contents) in files {
            fs::write(dir.join("output").join(name), contents).unwrap();
        }
        Self { dir }
    }

    fn run(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_share-verify"))
            .current_dir(&self.dir)
            .env_remove("RUST_LOG")
            .env_remove("CLICOLOR_FORCE")
            .output()
            .unwrap()
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn scenario(updated_p0: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("share_p0_0.txt", "3 -2\n5 5\n"),
        ("share_p1_0.txt", "-2 2\n-5 -4\n"),
        ("updated_share_p0_0.txt", updated_p0),
        ("updated_share_p1_0.txt", "-9 4\n0 0\n"),
    ]
}

#[test]
fn exits_zero_on_match() {
    let workdir = Workdir::new("match", &scenario("10 -3\n0 0\n"));
    let output = workdir.run();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Reconstructed u: [1, 0]\n"));
    assert!(stdout.contains("Verification: OK — "));
}

#[test]
fn exits_three_on_mismatch() {
    let workdir = Workdir::new("mismatch", &scenario("11 -3\n0 0\n"));
    let output = workdir.run();

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Verification: FAILED — differences at indices:\n"));
    assert!(stdout.ends_with("  idx 0: got=2 expected=1 diff=1\n"));
}

#[test]
fn exits_two_on_missing_file() {
    let mut files = scenario("10 -3\n0 0\n");
    files.retain(|(name, _)| *name != "share_p1_0.txt");
    let workdir = Workdir::new("missing", &files);
    let output = workdir.run();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stderr.is_empty());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Missing file: output"));
    assert!(stdout.contains("share_p1_0.txt"));
    assert!(!stdout.contains("Verification:"));
}

#[test]
fn exits_two_on_dimension_mismatch() {
    let workdir = Workdir::new("dimensions", &scenario("10 -3 1\n0 0\n"));
    let output = workdir.run();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stderr.is_empty());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Dimension mismatch between vectors:\nlen(u)=2 len(v)=2 len(updated)=3\n"
    );
}

#[test]
fn repeated_runs_agree() {
    let workdir = Workdir::new("repeat", &scenario("12 -3\n0 0\n"));
    let first = workdir.run();
    let second = workdir.run();

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
