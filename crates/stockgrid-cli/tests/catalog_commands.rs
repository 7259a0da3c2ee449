mod common;

use common::{json_content, stockgrid};
use predicates::prelude::*;
use stockgrid_testing::TestWorld;

#[test]
fn test_categories_in_catalog_order() {
    let world = TestWorld::new().with_sample_catalog();

    stockgrid(&world)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 categories from file"))
        .stdout(predicate::str::contains("tools\ngarden\nelectronics\n"));
}

#[test]
fn test_categories_json_keeps_keys_and_labels() {
    let world = TestWorld::new().with_sample_catalog();

    let content = json_content(&world, &["categories"]);
    insta::assert_json_snapshot!(content, @r#"
    {
      "categories": [
        {
          "label": "Tools",
          "name": "tools"
        },
        {
          "label": "Garden",
          "name": "garden"
        },
        {
          "label": "Electronics",
          "name": "electronics"
        }
      ],
      "source": "file"
    }
    "#);
}

#[test]
fn test_demo_source_needs_no_setup() {
    let world = TestWorld::new();

    stockgrid(&world)
        .args(["--source", "demo", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outdoor\ngarden\ntools\nelectronics\n"));
}

#[test]
fn test_products_are_inflated_with_stock() {
    let world = TestWorld::new().with_sample_catalog();

    let content = json_content(&world, &["--rounds", "2", "products", "tools"]);
    assert_eq!(content["total"], 4);

    let products = content["products"].as_array().unwrap();
    let titles: Vec<&str> = products
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Claw Hammer (Copy 1)",
            "Torque Wrench (Copy 1)",
            "Claw Hammer (Copy 2)",
            "Torque Wrench (Copy 2)",
        ]
    );

    for product in products {
        let stock = product["stock"].as_u64().unwrap();
        assert!((1..=20).contains(&stock), "stock {} out of range", stock);
        assert_eq!(product["category"], "tools");
    }
}

#[test]
fn test_full_inflation_yields_hundred_tools() {
    let world = TestWorld::new().with_sample_catalog();

    let content = json_content(&world, &["products", "tools"]);
    assert_eq!(content["total"], 100);
    assert_eq!(content["products"].as_array().unwrap().len(), 100);
}

#[test]
fn test_low_stock_filter_only_lists_low_products() {
    let world = TestWorld::new().with_sample_catalog();

    let content = json_content(&world, &["products", "garden", "--low-stock"]);
    assert_eq!(content["low_stock_only"], true);
    for product in content["products"].as_array().unwrap() {
        assert!(product["stock"].as_u64().unwrap() < 5);
        assert_ne!(product["level"], "success");
    }
}

#[test]
fn test_products_limit_and_csv() {
    let world = TestWorld::new().with_sample_catalog();

    let output = stockgrid(&world)
        .args(["products", "electronics", "--limit", "2", "--csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "id,title,category,price,stock");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Portable SSD 1TB (Copy 1),electronics,109.00,"));
}

#[test]
fn test_unknown_category_suggests_listing_categories() {
    let world = TestWorld::new().with_sample_catalog();

    stockgrid(&world)
        .args(["products", "toys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products in category 'toys'"))
        .stdout(predicate::str::contains("stockgrid categories"));
}

#[test]
fn test_missing_catalog_reports_generic_error() {
    let world = TestWorld::new();
    let missing = world.temp_dir().join("nowhere.json");

    stockgrid(&world)
        .arg("--catalog")
        .arg(&missing)
        .arg("categories")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to load categories"));

    stockgrid(&world)
        .arg("--catalog")
        .arg(&missing)
        .args(["products", "tools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading products."));
}
