use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterIntent {
    TypeChar(char),
    DeleteChar,
    /// Hold finished; start erasing.
    BeginDeleting,
    /// Text fully erased; move to the next phrase.
    NextPhrase { phrase_count: usize },
}

impl Intent for TypewriterIntent {}
