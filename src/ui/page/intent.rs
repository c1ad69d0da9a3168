use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    /// Scroll by `delta` lines, clamped to `0..=max`.
    ScrollBy { delta: isize, max: usize },
    /// Jump to an absolute line, clamped to `max`.
    ScrollTo { offset: usize, max: usize },
    /// Show or hide the non-featured projects past the first three.
    ToggleProjects,
}

impl Intent for PageIntent {}
