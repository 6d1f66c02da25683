use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{checkout_hours, clg, init_db, setup_test_db};

#[test]
fn test_stats_average_unavailable_with_no_returns() {
    let db_path = setup_test_db("stats_no_returns");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    // Nobody has ever returned: the average must read as unavailable,
    // not zero and not an error.
    clg()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Avg duration"))
        .stdout(contains("N/A"));
}

#[test]
fn test_stats_average_available_after_a_return() {
    let db_path = setup_test_db("stats_with_return");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("N/A").not());
}

#[test]
fn test_stats_counts_today() {
    let db_path = setup_test_db("stats_counts");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");
    checkout_hours(&db_path, "Bob", "Supply Run", "2");

    clg()
        .args(["--db", &db_path, "back", "1"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Currently out"))
        .stdout(contains("Returned today"))
        .stdout(contains("Departures today"));
}

#[test]
fn test_stats_top_destinations_ranked_by_count() {
    let db_path = setup_test_db("stats_top_dest");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");
    checkout_hours(&db_path, "Bob", "Ridge Trail", "3");
    checkout_hours(&db_path, "Carol", "Supply Run", "2");

    let output = clg()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let ridge = text.find("Ridge Trail").expect("Ridge Trail listed");
    let supply = text.find("Supply Run").expect("Supply Run listed");
    assert!(ridge < supply, "higher visit count should rank first");
}

#[test]
fn test_db_info_reports_row_counts() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    checkout_hours(&db_path, "Alice", "Ridge Trail", "3");

    clg()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Personnel"))
        .stdout(contains("Departures"))
        .stdout(contains("Extensions"));
}

#[test]
fn test_db_check_reports_ok() {
    let db_path = setup_test_db("db_check");
    init_db(&db_path);

    clg()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));
}
