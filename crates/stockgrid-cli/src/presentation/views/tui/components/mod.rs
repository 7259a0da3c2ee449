//! TUI Components
//!
//! Components hold UI state (selection, scroll offset, focus) plus the
//! input and render logic that goes with it. Domain changes leave a
//! component only as a [`DashboardAction`] for the renderer to forward.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent, data: &FooViewModel) -> Option<DashboardAction>;
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel);
//! }
//! ```
//!
//! Indices are clamped inside the component before every render.

pub mod dashboard;
pub mod grid;
pub mod sidebar;

pub use dashboard::{DashboardAction, DashboardAreas, DashboardComponent, Focus};
pub use grid::{GridComponent, place_cards};
pub use sidebar::SidebarComponent;
