//! # Presentation Layer
//!
//! User-facing output for the CLI, built on an adaptation of MVVM so the
//! inventory session never knows how it is displayed.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (Controller)     (Converter)       (Contract)        (View)     (Console/JSON/TUI)
//! ```
//!
//! ## Directory Guide
//!
//! ### `view_models/` (the data contract)
//! Plain `Serialize` structs. No calculation, no domain types.
//! "If I print this as JSON, is it clean and machine-readable?"
//!
//! ### `presenters/`
//! Pure functions from session/engine data to view models: filtering,
//! labels, stock classification.
//!
//! ### `views/`
//! `fmt::Display` for console output and Ratatui widgets for the dashboard.
//! Views map a view model to text; they never compute.
//!
//! ### `renderers/`
//! `ConsoleRenderer` prints a `CommandResultViewModel` as text or JSON.
//! `TuiRenderer` runs the dashboard event loop and owns UI state only.
//!
//! ### `formatters/`
//! Small string helpers shared by presenters (prices, labels, times).
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Decide which products count as low | `presenters/` |
//! | Change a colour or a border | `views/` |
//! | Change a key binding | `views/tui/components/` |
//! | Format a price | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
