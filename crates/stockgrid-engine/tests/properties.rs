use proptest::prelude::*;
use std::collections::HashSet;
use stockgrid_engine::{
    StockCache, cells_in_window, compute_geometry, inflate, resolve_cell, visible_window,
};
use stockgrid_types::{MAX_INFLATION_ROUNDS, Product};

fn catalog(ids: &HashSet<u64>) -> Vec<Product> {
    ids.iter()
        .map(|&id| Product::new(id, format!("Product {}", id), 1.0, "prop"))
        .collect()
}

proptest! {
    #[test]
    fn inflation_length_is_product(
        ids in prop::collection::hash_set(0u64..1_000_000, 0..40),
        rounds in 1u32..=MAX_INFLATION_ROUNDS,
    ) {
        let products = catalog(&ids);
        let inflated = inflate(&products, rounds).unwrap();
        prop_assert_eq!(inflated.len(), products.len() * rounds as usize);
    }

    #[test]
    fn inflation_ids_are_unique(
        ids in prop::collection::hash_set(0u64..1_000_000, 1..40),
        rounds in 1u32..=MAX_INFLATION_ROUNDS,
    ) {
        let inflated = inflate(&catalog(&ids), rounds).unwrap();
        let unique: HashSet<u64> = inflated.iter().map(|p| p.id()).collect();
        prop_assert_eq!(unique.len(), inflated.len());
    }

    #[test]
    fn inflation_is_deterministic(
        ids in prop::collection::hash_set(0u64..1_000, 0..20),
        rounds in 1u32..=MAX_INFLATION_ROUNDS,
    ) {
        let products = catalog(&ids);
        prop_assert_eq!(inflate(&products, rounds).unwrap(), inflate(&products, rounds).unwrap());
    }

    #[test]
    fn decrease_never_increases_or_underflows(
        seed in any::<u64>(),
        steps in 0usize..40,
    ) {
        let products = inflate(&[Product::new(7, "Seven", 1.0, "prop")], 1).unwrap();
        let mut cache = StockCache::with_seed(seed);
        let id = products[0].id();
        let mut previous = cache.ensure_initialized("prop", &products)[&id];

        for _ in 0..steps {
            let next = cache.decrease("prop", id)[&id];
            prop_assert!(next <= previous);
            prop_assert!(previous == 0 || next == previous - 1);
            previous = next;
        }
    }

    #[test]
    fn geometry_fills_width_and_covers_items(
        width in 1.0f64..5000.0,
        card_width in 1.0f64..600.0,
        items in 0usize..10_000,
    ) {
        let g = compute_geometry(width, 800.0, items, card_width, 10.0).unwrap();
        prop_assert!(g.column_count >= 1);
        prop_assert!((g.cell_width * g.column_count as f64 - width).abs() < 1e-6);
        prop_assert!(g.row_count * g.column_count >= items);
        prop_assert!(g.row_count == 0 || (g.row_count - 1) * g.column_count < items);
    }

    #[test]
    fn window_rows_intersect_viewport(
        items in 1usize..5_000,
        scroll in -100.0f64..200_000.0,
        height in 1.0f64..2_000.0,
    ) {
        let g = compute_geometry(1000.0, height, items, 250.0, 35.0).unwrap();
        match visible_window(scroll, height, &g) {
            Some(window) => {
                let top = scroll.max(0.0);
                let bottom = top + height;
                for row in window.rows() {
                    let row_top = row as f64 * g.cell_height;
                    // Tolerate rounding in the floor/ceil of the row division.
                    prop_assert!(row_top < bottom + 1e-6);
                    prop_assert!(row_top + g.cell_height > top - 1e-6);
                }
                for cell in cells_in_window(window, &g) {
                    prop_assert!(cell.item_index < items);
                    prop_assert_eq!(resolve_cell(cell.row, cell.column, &g), Some(cell));
                }
            }
            None => prop_assert!(scroll.max(0.0) >= g.content_height()),
        }
    }
}
