//! Intents for the loading intro.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIntent {
    /// Repeating tick advanced the progress bar.
    Tick { step: u8 },

    /// Post-load pause elapsed.
    EnterWelcome,

    /// Welcome message has been shown long enough.
    EnterComplete,
}

impl Intent for LoadingIntent {}
