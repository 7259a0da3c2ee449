mod common;

use common::{json_content, stockgrid};
use predicates::prelude::*;
use stockgrid_testing::TestWorld;

#[test]
fn test_layout_for_hundred_cards() {
    let world = TestWorld::new();

    let content = json_content(
        &world,
        &["layout", "--items", "100", "--width", "120", "--height", "21"],
    );

    assert_eq!(content["columns"], 4);
    assert_eq!(content["rows"], 25);
    assert_eq!(content["cell_width"], 30.0);
    assert_eq!(content["content_height"], 175.0);
    assert_eq!(content["max_scroll"], 154.0);
    assert_eq!(content["visible"]["first_row"], 0);
    assert_eq!(content["visible"]["last_row"], 2);
    assert_eq!(content["rendered"]["last_row"], 3);
    assert_eq!(content["rendered_cells"], 16);
}

#[test]
fn test_layout_scrolled_to_the_end() {
    let world = TestWorld::new();

    let content = json_content(
        &world,
        &[
            "layout", "--items", "100", "--width", "120", "--height", "21", "--scroll-top", "154",
        ],
    );

    assert_eq!(content["visible"]["first_row"], 22);
    assert_eq!(content["visible"]["last_row"], 24);
    assert_eq!(content["rendered"]["first_row"], 21);
    assert_eq!(content["rendered"]["last_row"], 24);
}

#[test]
fn test_layout_uses_configured_card_width() {
    let world = TestWorld::new();
    world.write_config("[grid]\ncard_width = 40.0\n").unwrap();

    let content = json_content(
        &world,
        &["layout", "--items", "10", "--width", "120", "--height", "21"],
    );
    assert_eq!(content["columns"], 3);
    assert_eq!(content["card_width"], 40.0);
}

#[test]
fn test_layout_plain_output() {
    let world = TestWorld::new();

    stockgrid(&world)
        .args(["layout", "--items", "7", "--width", "100", "--height", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 columns x 3 rows"))
        .stdout(predicate::str::contains("Rendered cells: 7"));
}

#[test]
fn test_layout_rejects_empty_viewport() {
    let world = TestWorld::new();

    stockgrid(&world)
        .args(["layout", "--items", "10", "--width", "0", "--height", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
