mod common;

use common::stockgrid;
use predicates::prelude::*;
use stockgrid_testing::TestWorld;

#[test]
fn test_init_writes_config_from_flags() {
    let world = TestWorld::new().with_sample_catalog();

    stockgrid(&world)
        .args(["--rounds", "10", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved"));

    let config = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(config.contains("source = \"file\""));
    assert!(config.contains("inflation_rounds = 10"));
    assert!(config.contains("catalog.json"));
}

#[test]
fn test_init_keeps_existing_config_without_force() {
    let world = TestWorld::new();
    world.write_config("[inventory]\ninflation_rounds = 3\n").unwrap();

    stockgrid(&world)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration already exists"))
        .stdout(predicate::str::contains("Inflation rounds: 3"));

    stockgrid(&world)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inflation rounds: 50"));
}

#[test]
fn test_saved_config_drives_later_commands() {
    let world = TestWorld::new();
    let catalog = world.temp_dir().join("saved.json");
    stockgrid_testing::fixtures::write_catalog(&catalog, &stockgrid_testing::sample_products())
        .unwrap();

    stockgrid(&world)
        .arg("--catalog")
        .arg(&catalog)
        .args(["--rounds", "1", "init"])
        .assert()
        .success();

    stockgrid(&world)
        .args(["products", "garden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 products in Garden"));
}

#[test]
fn test_invalid_rounds_fail() {
    let world = TestWorld::new();

    stockgrid(&world)
        .args(["--rounds", "0", "categories"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("inflation_rounds"));
}

#[test]
fn test_dashboard_requires_terminal() {
    let world = TestWorld::new();

    stockgrid(&world)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
