use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use stockgrid_engine::StockCache;
use stockgrid_providers::{CatalogSource, StaticCatalog};
use stockgrid_runtime::{
    CatalogState, InventorySession, PRODUCTS_ERROR, SessionOptions, Viewport,
};
use stockgrid_testing::{CatalogGate, ScriptedCatalog, sample_products};
use stockgrid_types::{INITIAL_STOCK_MAX, INITIAL_STOCK_MIN, LOW_STOCK_THRESHOLD, Product};

const SETTLE: Duration = Duration::from_secs(5);

fn session_with(source: Arc<dyn CatalogSource>) -> InventorySession {
    InventorySession::new(source, StockCache::with_seed(2024), SessionOptions::default()).unwrap()
}

fn ready_session(category: &str) -> InventorySession {
    let mut session = session_with(Arc::new(ScriptedCatalog::new(sample_products())));
    session.select_category(category);
    assert!(session.wait_until_settled(SETTLE).unwrap());
    session
}

#[test]
fn test_selecting_category_inflates_and_initializes_stock() {
    let session = ready_session("tools");

    assert_eq!(session.products_state(), &CatalogState::Ready);
    assert_eq!(session.products().len(), 100);

    let stock = session.stock().unwrap();
    assert_eq!(stock.len(), 100);
    assert!(
        stock
            .values()
            .all(|&s| (INITIAL_STOCK_MIN..=INITIAL_STOCK_MAX).contains(&s))
    );

    let expected = stock.values().filter(|&&s| s < LOW_STOCK_THRESHOLD).count();
    assert_eq!(session.low_stock().len(), expected);
}

#[test]
fn test_listener_sees_every_transition() {
    let mut session = session_with(Arc::new(ScriptedCatalog::new(sample_products())));
    let sizes = Rc::new(RefCell::new(Vec::new()));
    {
        let sizes = Rc::clone(&sizes);
        session.subscribe_low_stock(move |items| sizes.borrow_mut().push(items.len()));
    }

    session.select_category("tools");
    assert!(session.wait_until_settled(SETTLE).unwrap());
    // Emptied on switch, then published after initialization.
    assert_eq!(sizes.borrow().len(), 2);
    assert_eq!(sizes.borrow()[0], 0);

    let id = session.products()[0].id();
    session.decrease(id);
    assert_eq!(sizes.borrow().len(), 3);

    session.select_category("garden");
    assert!(session.wait_until_settled(SETTLE).unwrap());
    let after_garden = sizes.borrow().len();
    assert_eq!(after_garden, 5);

    // Cached products: restored synchronously, one publication.
    session.select_category("tools");
    assert_eq!(sizes.borrow().len(), after_garden + 1);
    assert_eq!(*sizes.borrow().last().unwrap(), session.low_stock().len());
}

#[test]
fn test_decrease_into_low_stock_grows_set_by_one() {
    let mut session = ready_session("tools");
    let products = session.products();

    let target = products
        .iter()
        .map(|p| p.id())
        .find(|&id| session.stock_of(id) >= 6)
        .expect("seeded stock has an item at or above 6");
    while session.stock_of(target) > 6 {
        session.decrease(target);
    }

    let before = session.low_stock().len();
    assert_eq!(session.decrease(target), Some(5));
    assert_eq!(session.low_stock().len(), before);
    assert_eq!(session.decrease(target), Some(4));
    assert_eq!(session.low_stock().len(), before + 1);
    assert!(session.low_stock().iter().any(|item| item.product.id() == target));
}

#[test]
fn test_stock_restored_after_switching_back() {
    let mut session = ready_session("tools");
    let id = session.products()[3].id();
    session.decrease(id);
    session.decrease(id);
    let kept = session.stock_of(id);

    session.select_category("garden");
    assert!(session.wait_until_settled(SETTLE).unwrap());
    assert_eq!(session.products().len(), 150);
    assert_ne!(session.stock().unwrap().len(), 100);

    session.select_category("tools");
    assert_eq!(session.products_state(), &CatalogState::Ready);
    assert_eq!(session.stock_of(id), kept);
}

#[test]
fn test_late_result_for_unselected_category_is_ignored() {
    let gate = CatalogGate::new();
    let catalog = Arc::new(ScriptedCatalog::new(sample_products()).with_gate("tools", gate.clone()));
    let mut session = session_with(catalog.clone());

    session.select_category("tools");
    assert_eq!(session.products_state(), &CatalogState::Loading);
    session.select_category("garden");

    // garden completes, tools is still held by the gate.
    assert!(!session.wait_until_settled(Duration::from_millis(300)).unwrap());
    assert_eq!(session.selected_category(), Some("garden"));
    assert_eq!(session.products_state(), &CatalogState::Ready);

    gate.open();
    assert!(session.wait_until_settled(SETTLE).unwrap());
    assert_eq!(session.selected_category(), Some("garden"));
    assert!(session.stock_cache().get("tools").is_none());
    assert!(session.products().iter().all(|p| p.category == "garden"));

    // The late result was cached, so returning does not refetch.
    session.select_category("tools");
    assert_eq!(session.products_state(), &CatalogState::Ready);
    assert_eq!(catalog.product_calls("tools"), 1);
    assert_eq!(session.stock().unwrap().len(), 100);
}

#[test]
fn test_failed_fetch_surfaces_generic_error() {
    let catalog = ScriptedCatalog::new(sample_products()).with_failure("garden");
    let mut session = session_with(Arc::new(catalog));

    session.select_category("garden");
    assert!(session.wait_until_settled(SETTLE).unwrap());

    assert_eq!(
        session.products_state(),
        &CatalogState::Error(PRODUCTS_ERROR.to_string())
    );
    assert!(session.products().is_empty());
    assert!(session.low_stock().is_empty());
    assert!(session.stock_cache().get("garden").is_none());
    assert_eq!(session.decrease(40), None);
}

#[test]
fn test_failed_category_list() {
    let catalog = ScriptedCatalog::new(sample_products()).with_failing_categories();
    let mut session = session_with(Arc::new(catalog));

    session.load_categories();
    assert_eq!(session.categories_state(), &CatalogState::Loading);
    assert!(session.wait_until_settled(SETTLE).unwrap());
    assert!(matches!(session.categories_state(), CatalogState::Error(_)));
    assert!(session.categories().is_empty());
}

#[test]
fn test_categories_loaded_in_catalog_order() {
    let mut session = session_with(Arc::new(ScriptedCatalog::new(sample_products())));
    session.load_categories();
    assert!(session.wait_until_settled(SETTLE).unwrap());
    assert_eq!(session.categories(), ["tools", "garden", "electronics"]);
}

#[test]
fn test_decrease_requires_known_product() {
    let mut session = session_with(Arc::new(ScriptedCatalog::new(sample_products())));
    assert_eq!(session.decrease(70), None);

    session.select_category("tools");
    assert!(session.wait_until_settled(SETTLE).unwrap());
    assert_eq!(session.decrease(999_999), None);
    assert!(session.decrease(session.products()[0].id()).is_some());
}

#[test]
fn test_geometry_follows_active_products() {
    let session = ready_session("tools");
    let frame = session
        .geometry(Viewport {
            width: 120.0,
            height: 21.0,
            scroll_top: 0.0,
        })
        .unwrap();

    assert_eq!(frame.geometry.column_count, 4);
    assert_eq!(frame.geometry.cell_width, 30.0);
    assert_eq!(frame.geometry.row_count, 25);
    let window = frame.window.unwrap();
    assert_eq!((window.first_row, window.last_row), (0, 3));

    assert!(
        session
            .geometry(Viewport {
                width: 0.0,
                height: 21.0,
                scroll_top: 0.0,
            })
            .is_err()
    );
}

#[test]
fn test_rejects_invalid_rounds() {
    let options = SessionOptions {
        rounds: 0,
        ..SessionOptions::default()
    };
    let result = InventorySession::new(
        Arc::new(ScriptedCatalog::new(sample_products())),
        StockCache::new(),
        options,
    );
    assert!(result.is_err());
}

#[test]
fn test_reload_revalidates_without_losing_stock() {
    let catalog = Arc::new(ScriptedCatalog::new(sample_products()));
    let mut session = session_with(catalog.clone());
    session.load_categories();
    session.select_category("tools");
    assert!(session.wait_until_settled(SETTLE).unwrap());

    let id = session.products()[10].id();
    session.decrease(id);
    let kept = session.stock_of(id);

    session.reload();
    // Cached values stay on screen while the refetch runs.
    assert_eq!(session.products_state(), &CatalogState::Ready);
    assert_eq!(session.categories_state(), &CatalogState::Ready);
    assert!(session.wait_until_settled(SETTLE).unwrap());

    assert_eq!(catalog.product_calls("tools"), 2);
    assert_eq!(session.products().len(), 100);
    assert_eq!(session.stock_of(id), kept);
}

#[test]
fn test_cached_category_that_cannot_inflate_clears_previous_grid() {
    // Replica ids for `huge` overflow a u64.
    let catalog = StaticCatalog::new(vec![
        Product::new(1, "Hammer", 9.99, "tools"),
        Product::new(u64::MAX / 5, "Crate", 1.0, "huge"),
    ]);
    let stock = StockCache::with_seed(3).with_entries("tools", [(10, 1), (11, 2)].into());
    let options = SessionOptions {
        rounds: 2,
        ..SessionOptions::default()
    };
    let mut session = InventorySession::new(Arc::new(catalog), stock, options).unwrap();
    let published = Rc::new(RefCell::new(Vec::new()));
    {
        let published = Rc::clone(&published);
        session.subscribe_low_stock(move |items| published.borrow_mut().push(items.len()));
    }

    session.select_category("huge");
    assert!(session.wait_until_settled(SETTLE).unwrap());
    session.select_category("tools");
    assert!(session.wait_until_settled(SETTLE).unwrap());
    assert_eq!(session.low_stock().len(), 2);

    // Served from the query cache this time.
    session.select_category("huge");
    assert_eq!(session.selected_category(), Some("huge"));
    assert_eq!(
        session.products_state(),
        &CatalogState::Error(PRODUCTS_ERROR.to_string())
    );
    assert!(session.products().is_empty());
    assert!(session.low_stock().is_empty());
    assert_eq!(published.borrow().last(), Some(&0));
    assert_eq!(session.decrease(10), None);
}
