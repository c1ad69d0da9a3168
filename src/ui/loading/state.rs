//! State for the loading intro.

use crate::ui::mvi::UiState;

/// Stage of the intro. Ordered, and only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LoadingPhase {
    #[default]
    Loading,
    Welcome,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadingState {
    /// Percentage in `0..=100`, never decreasing.
    pub progress: u8,
    pub phase: LoadingPhase,
}

impl UiState for LoadingState {}

impl LoadingState {
    pub const MAX_PROGRESS: u8 = 100;

    pub fn is_loaded(&self) -> bool {
        self.progress >= Self::MAX_PROGRESS
    }

    /// Progress as a `0.0..=1.0` ratio for gauges.
    pub fn ratio(&self) -> f64 {
        f64::from(self.progress) / f64::from(Self::MAX_PROGRESS)
    }
}
