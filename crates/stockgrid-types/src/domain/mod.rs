pub mod grid;
pub mod product;
pub mod stock;

pub use grid::*;
pub use product::*;
pub use stock::*;
