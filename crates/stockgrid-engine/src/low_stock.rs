use crate::stock::{StockNotice, StockObserver};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use stockgrid_types::{InflatedProduct, LOW_STOCK_THRESHOLD, LowStockItem, StockEntries};

/// Products below [`LOW_STOCK_THRESHOLD`], in `products` order.
///
/// Products without an entry are skipped rather than treated as zero.
pub fn project_low_stock(
    products: &[InflatedProduct],
    entries: Option<&StockEntries>,
) -> Vec<LowStockItem> {
    let Some(entries) = entries else {
        return Vec::new();
    };

    products
        .iter()
        .filter_map(|product| {
            entries
                .get(&product.id())
                .filter(|&&stock| stock < LOW_STOCK_THRESHOLD)
                .map(|&stock| LowStockItem {
                    product: product.clone(),
                    stock,
                })
        })
        .collect()
}

/// The category and inflated products currently on screen
#[derive(Debug, Clone, Default)]
pub struct ActiveProducts {
    pub category: Option<String>,
    pub products: Arc<[InflatedProduct]>,
}

/// Handle shared between the session (writer) and the detector (reader)
pub type SharedActiveProducts = Rc<RefCell<ActiveProducts>>;

/// Stock observer that republishes the low-stock projection for the active
/// category on every notice, without debouncing.
pub struct LowStockDetector {
    active: SharedActiveProducts,
    sink: Box<dyn FnMut(Vec<LowStockItem>)>,
}

impl LowStockDetector {
    pub fn new(active: SharedActiveProducts, sink: impl FnMut(Vec<LowStockItem>) + 'static) -> Self {
        Self {
            active,
            sink: Box::new(sink),
        }
    }
}

impl StockObserver for LowStockDetector {
    fn on_stock_changed(&mut self, notice: &StockNotice<'_>) {
        let items = {
            let active = self.active.borrow();
            if active.category.as_deref() != Some(notice.category) {
                return;
            }
            project_low_stock(&active.products, Some(notice.entries))
        };

        (self.sink)(items);
    }
}
