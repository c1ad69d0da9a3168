use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    /// First visible line of the page body.
    pub scroll: usize,
    pub show_all_projects: bool,
}

impl UiState for PageState {}
