#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary in test mode, without colors, against `db_path`.
pub fn fitlog(db_path: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("fitlog");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--db", db_path, "--test"]);
    cmd
}

/// The binary outside test mode, with `home` as the user's home directory.
pub fn fitlog_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("fitlog");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("VISUAL");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh DB with the schema in place.
pub fn init_db(name: &str) -> String {
    let db = setup_test_db(name);
    fitlog(&db).arg("init").assert().success();
    db
}

/// Log a workout and return its id from the "Id: ..." line.
pub fn add_workout(db: &str, args: &[&str]) -> String {
    let out = fitlog(db).arg("add").args(args).assert().success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    stdout
        .lines()
        .find_map(|l| l.split("Id: ").nth(1))
        .map(|s| s.trim().to_string())
        .expect("add prints the new id")
}
