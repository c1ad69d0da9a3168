//! Portfolio page navigation.
//!
//! Scroll position and the "show all projects" toggle, kept in MVI form so
//! key handling stays a pure transformation.

mod intent;
mod reducer;
mod section;
mod state;

pub use intent::PageIntent;
pub use reducer::PageReducer;
pub use section::Section;
pub use state::PageState;
