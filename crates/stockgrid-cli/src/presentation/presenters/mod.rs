pub mod catalog;
pub mod dashboard;
pub mod init;
pub mod layout;

pub use catalog::{present_categories, present_products, product_card, stock_status};
pub use dashboard::{present_dashboard, present_stock_patch};
pub use init::present_init;
pub use layout::{LayoutFacts, present_layout};
