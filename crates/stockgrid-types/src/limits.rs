/// Stock strictly below this value is reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Inclusive bounds of the random stock assigned to a product on first sight.
pub const INITIAL_STOCK_MIN: u32 = 1;
pub const INITIAL_STOCK_MAX: u32 = 20;

/// Upper bound on inflation rounds; product ids stay injective up to this count.
pub const MAX_INFLATION_ROUNDS: u32 = 50;

/// Default card footprint in pixels (minimum width, fixed height).
pub const DEFAULT_CARD_WIDTH: f64 = 250.0;
pub const DEFAULT_CARD_HEIGHT: f64 = 350.0;
