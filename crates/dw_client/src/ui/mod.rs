//! UI state projection and rendering.
//!
//! The monitor's display state is computed as a plain value
//! ([`UiState`], via [`project`]) and applied by a thin adapter
//! ([`render`], a console renderer here). Any other rendering surface can
//! consume the same `UiState`.

mod render;
mod state;

pub use render::render;
pub use state::{project, CategoryRow, EventRow, UiState};
