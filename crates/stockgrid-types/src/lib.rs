pub mod domain;
pub mod limits;

pub use domain::*;
pub use limits::*;
