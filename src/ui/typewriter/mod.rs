//! Typewriter feature module for the hero tagline.
//!
//! Types a phrase one character at a time, holds it, deletes it, and moves
//! on to the next phrase, forever.
//!
//! # Architecture
//!
//! - `state.rs` - phrase index, visible text and direction
//! - `intent.rs` - single keystroke events
//! - `reducer.rs` - applies a keystroke (pure)
//! - `plan.rs` - decides the next keystroke and its delay (pure)
//! - `cycler.rs` - owns the one pending timer and drives the loop

mod cycler;
mod error;
mod intent;
mod plan;
mod reducer;
mod state;

pub use cycler::{TypewriterCycler, TypewriterTimings};
pub use error::TypewriterError;
pub use intent::TypewriterIntent;
pub use plan::{plan_step, Step};
pub use reducer::TypewriterReducer;
pub use state::{Direction, TypewriterState};
