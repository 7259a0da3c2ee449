// NOTE: stockgrid Architecture Rationale
//
// Why one session per run (not a shared service)?
// - Stock is simulated client-side and lives only as long as the process
// - The session owns every stock map; views only ever see snapshots
// - Trade-off: two terminals show two independent warehouses
//
// Why a single UI thread?
// - Stock mutations and low-stock notifications stay strictly ordered
// - Catalog calls run on a small blocking pool and are polled between frames
// - Late catalog answers are cached but never touch stock for another category
//
// Why virtualize the grid?
// - A category inflated 50 times holds hundreds of cards
// - Only rows inside the viewport (plus overscan) are ever drawn

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, SourceArg};
pub use commands::run;
