//! Loading intro feature module.
//!
//! Drives the progress bar from 0 to 100, then walks the intro through
//! Loading → Welcome → Complete and tells the host, exactly once, that the
//! portfolio can be shown.
//!
//! # Architecture
//!
//! - `state.rs` - progress and phase record
//! - `intent.rs` - timer-originated events (Tick, EnterWelcome, EnterComplete)
//! - `reducer.rs` - forward-only state transitions (pure)
//! - `sequencer.rs` - timer ownership and the completion signal
//! - `completion.rs` - one-shot notification handed to the host

mod completion;
mod error;
mod intent;
mod reducer;
mod sequencer;
mod state;

pub use completion::{Completion, CompletionStatus};
pub use error::SequencerError;
pub use intent::LoadingIntent;
pub use reducer::LoadingReducer;
pub use sequencer::{LoadingSequencer, LoadingTimings};
pub use state::{LoadingPhase, LoadingState};
