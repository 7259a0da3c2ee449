pub mod text;
pub mod time;

pub use text::{capitalize, format_price, truncate};
pub use time::format_clock;
