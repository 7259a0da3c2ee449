pub mod catalog;
pub mod init;
pub mod layout;
pub mod tui;

pub use catalog::{CategoryListView, ProductListView};
pub use init::InitView;
pub use layout::LayoutView;
