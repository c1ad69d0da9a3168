use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Typing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterState {
    pub phrase_index: usize,
    /// Always a prefix of the current phrase.
    pub displayed: String,
    pub direction: Direction,
}

impl UiState for TypewriterState {}

impl TypewriterState {
    /// Number of characters currently shown.
    pub fn shown_chars(&self) -> usize {
        self.displayed.chars().count()
    }
}
