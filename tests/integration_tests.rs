use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{
    checkout_hours, checkout_until, clg, config_dir_under, departure_text_column, init_db,
    setup_test_db, temp_home,
};

#[test]
fn test_init_creates_tables() {
    let db_path = setup_test_db("init_tables");

    init_db(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in ["personnel", "departures", "extensions", "log"] {
        let found: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(found.as_deref(), Some(table));
    }
}

#[test]
fn test_init_with_relative_db_name_lands_in_config_dir() {
    let home = temp_home("init_relative");

    clg()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--db", "camp.sqlite", "init"])
        .assert()
        .success();

    // The migrated database is the one the config file records.
    let db_file = config_dir_under(&home).join("camp.sqlite");
    assert!(db_file.exists(), "database missing from config dir");

    let conn = rusqlite::Connection::open(&db_file).expect("open db");
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='departures'",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    assert_eq!(found.as_deref(), Some("departures"));

    // A later run without --db must find the same database through the config.
    clg()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["out", "Alice", "Ridge Trail", "--hours", "3"])
        .assert()
        .success();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM departures", [], |row| row.get(0))
        .expect("query departures");
    assert_eq!(count, 1);
}

#[test]
fn test_out_and_board() {
    let db_path = setup_test_db("out_board");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "board"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Ridge Trail"))
        .stdout(contains("remaining"))
        .stdout(contains("1 out, 0 overdue"));
}

#[test]
fn test_out_requires_destination() {
    let db_path = setup_test_db("out_no_dest");
    init_db(&db_path);

    clg()
        .args(["--db", &db_path, "out", "Alice", "  "])
        .assert()
        .failure()
        .stderr(contains("destination"));
}

#[test]
fn test_out_rejects_nonpositive_hours() {
    let db_path = setup_test_db("out_zero_hours");
    init_db(&db_path);

    clg()
        .args(["--db", &db_path, "out", "Alice", "Ridge Trail", "--hours", "0"])
        .assert()
        .failure()
        .stderr(contains("positive"));
}

#[test]
fn test_out_rejects_absurd_hours() {
    let db_path = setup_test_db("out_absurd_hours");
    init_db(&db_path);

    clg()
        .args([
            "--db",
            &db_path,
            "out",
            "Alice",
            "Ridge Trail",
            "--hours",
            "9999999999",
        ])
        .assert()
        .failure()
        .stderr(contains("must not exceed"));
}

#[test]
fn test_out_rejects_past_until() {
    let db_path = setup_test_db("out_past_until");
    init_db(&db_path);

    clg()
        .args([
            "--db",
            &db_path,
            "out",
            "Alice",
            "Ridge Trail",
            "--until",
            "2000-01-01 10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("not in the future"));
}

#[test]
fn test_out_adds_unknown_person_to_manifest() {
    let db_path = setup_test_db("out_adds_person");
    init_db(&db_path);

    clg()
        .args([
            "--db",
            &db_path,
            "out",
            "Dave",
            "Boat Launch",
            "--hours",
            "2",
            "--phone",
            "555-0001",
        ])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "personnel"])
        .assert()
        .success()
        .stdout(contains("Dave"))
        .stdout(contains("555-0001"));
}

#[test]
fn test_back_is_idempotent() {
    let db_path = setup_test_db("back_idempotent");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success()
        .stdout(contains("marked as returned"));

    let first = departure_text_column(&db_path, 1, "actual_return");
    assert!(first.is_some());

    // Second call must be a no-op and leave the timestamp untouched.
    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success()
        .stdout(contains("already returned"));

    let second = departure_text_column(&db_path, 1, "actual_return");
    assert_eq!(first, second);
}

#[test]
fn test_back_unknown_id_fails() {
    let db_path = setup_test_db("back_unknown");
    init_db(&db_path);

    clg()
        .args(["--db", &db_path, "back", "99"])
        .assert()
        .failure()
        .stderr(contains("No departure found"));
}

#[test]
fn test_extend_accumulates_hours_and_count() {
    let db_path = setup_test_db("extend_accumulates");
    init_db(&db_path);

    checkout_until(&db_path, "Alice", "Ridge Trail", "2099-01-01 10:00");

    clg()
        .args(["--db", &db_path, "extend", "1", "--hours", "2"])
        .assert()
        .success()
        .stdout(contains("extension #1"));

    clg()
        .args(["--db", &db_path, "extend", "1", "--hours", "3"])
        .assert()
        .success()
        .stdout(contains("extension #2"));

    // expected_return shifted by the summed hours, count matches the calls
    let expected = departure_text_column(&db_path, 1, "expected_return");
    assert_eq!(expected.as_deref(), Some("2099-01-01 15:00:00"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row(
            "SELECT extensions_count FROM departures WHERE id = 1",
            [],
            |row| row.get(0),
        )
        .expect("query count");
    assert_eq!(count, 2);

    let sum: i64 = conn
        .query_row(
            "SELECT SUM(hours) FROM extensions WHERE departure_id = 1",
            [],
            |row| row.get(0),
        )
        .expect("query sum");
    assert_eq!(sum, 5);
}

#[test]
fn test_extend_rejects_returned_departure() {
    let db_path = setup_test_db("extend_returned");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "extend", "1", "--hours", "2"])
        .assert()
        .failure()
        .stderr(contains("already returned"));
}

#[test]
fn test_extend_rejects_nonpositive_hours() {
    let db_path = setup_test_db("extend_zero");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "extend", "1", "--hours", "0"])
        .assert()
        .failure()
        .stderr(contains("positive"));
}

#[test]
fn test_extend_rejects_absurd_hours() {
    let db_path = setup_test_db("extend_absurd");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "extend", "1", "--hours", "9999999999"])
        .assert()
        .failure()
        .stderr(contains("must not exceed"));
}

#[test]
fn test_board_excludes_returned_departures() {
    let db_path = setup_test_db("board_excludes_returned");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");
    checkout_hours(&db_path, "Bob", "Supply Run", "2");

    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "board"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Alice").not());
}

#[test]
fn test_board_orders_by_soonest_expected_return() {
    let db_path = setup_test_db("board_order");
    init_db(&db_path);

    checkout_until(&db_path, "Late Larry", "Summit", "2099-01-02 10:00");
    checkout_until(&db_path, "Early Erin", "Creek", "2099-01-01 10:00");

    let output = clg()
        .args(["--db", &db_path, "board"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let erin = text.find("Early Erin").expect("Erin on board");
    let larry = text.find("Late Larry").expect("Larry on board");
    assert!(erin < larry, "soonest expected return should come first");
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("departed to Ridge Trail"));
}

#[test]
fn test_log_dates_share_one_format() {
    let db_path = setup_test_db("log_one_format");
    init_db(&db_path);

    // Rows come from different writers: the migration marker from init,
    // operation rows from out and back.
    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");
    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let mut stmt = conn.prepare("SELECT date FROM log").expect("prepare");
    let dates: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("query log")
        .collect::<Result<_, _>>()
        .expect("collect dates");

    assert!(!dates.is_empty());
    for d in &dates {
        assert!(
            camplog::utils::time::parse_dt(d).is_some(),
            "log date not in storage format: {}",
            d
        );
    }
}
