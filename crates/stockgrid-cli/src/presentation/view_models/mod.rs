pub mod catalog;
pub mod common;
pub mod dashboard;
pub mod init;
pub mod layout;
pub mod result;

pub use catalog::{CategoryEntry, CategoryListViewModel, ProductCardViewModel, ProductListViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use dashboard::{
    CardStockViewModel, DashboardUpdate, DashboardViewModel, LowStockEntry, LowStockViewModel,
    ProductGridViewModel, SidebarViewModel, StatusBarViewModel, StockPatchViewModel,
};
pub use init::InitResultViewModel;
pub use layout::{LayoutViewModel, RowSpanViewModel};
pub use result::CommandResultViewModel;
