//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// In this crate intents are almost always produced by timers (a tick, an
/// expired delay, the next typewriter keystroke) rather than by the user.
pub trait Intent: Send + 'static {}
