#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn clg() -> Command {
    cargo_bin_cmd!("camplog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_camplog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a fresh fake home directory so config-dir tests never touch the
/// real one. Point HOME (and APPDATA on Windows) at it.
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_camplog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Config directory as the binary resolves it under a redirected home
pub fn config_dir_under(home: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(home).join("camplog")
    } else {
        PathBuf::from(home).join(".camplog")
    }
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema on a fresh test DB
pub fn init_db(db_path: &str) {
    clg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Check a person out with a far-future fixed return time so assertions
/// on expected_return are deterministic
pub fn checkout_until(db_path: &str, name: &str, destination: &str, until: &str) {
    clg()
        .args([
            "--db",
            db_path,
            "out",
            name,
            destination,
            "--until",
            until,
        ])
        .assert()
        .success();
}

/// Check a person out with a duration in hours
pub fn checkout_hours(db_path: &str, name: &str, destination: &str, hours: &str) {
    clg()
        .args([
            "--db",
            db_path,
            "out",
            name,
            destination,
            "--hours",
            hours,
        ])
        .assert()
        .success();
}

/// Read a single TEXT column for a departure id directly from the DB
pub fn departure_text_column(db_path: &str, id: i64, column: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        &format!("SELECT {} FROM departures WHERE id = ?1", column),
        [id],
        |row| row.get::<_, Option<String>>(0),
    )
    .expect("query departure")
}
