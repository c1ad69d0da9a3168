//! Model-View-Intent (MVI) primitives for the animated views.
//!
//! Every choreography keeps its data in a [`UiState`] value and changes it
//! only by feeding an [`Intent`] through a [`Reducer`]. Timers, channels and
//! other effects stay outside the reducer, in the component that owns the
//! state; renderers only read it.
//!
//! ```text
//! timer fires ──→ Intent ──→ Reducer ──→ State ──→ render
//!      ↑                                   │
//!      └──────── component re-arms ────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
