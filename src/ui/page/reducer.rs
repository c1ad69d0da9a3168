use crate::ui::mvi::Reducer;

use super::intent::PageIntent;
use super::state::PageState;

pub struct PageReducer;

impl Reducer for PageReducer {
    type State = PageState;
    type Intent = PageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::ScrollBy { delta, max } => PageState {
                scroll: state.scroll.saturating_add_signed(delta).min(max),
                ..state
            },
            PageIntent::ScrollTo { offset, max } => PageState {
                scroll: offset.min(max),
                ..state
            },
            PageIntent::ToggleProjects => PageState {
                show_all_projects: !state.show_all_projects,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_down_clamps_to_max() {
        let state = PageReducer::reduce(PageState::default(), PageIntent::ScrollBy { delta: 50, max: 10 });
        assert_eq!(state.scroll, 10);
    }

    #[test]
    fn scroll_up_stops_at_top() {
        let state = PageState {
            scroll: 3,
            ..PageState::default()
        };
        let state = PageReducer::reduce(state, PageIntent::ScrollBy { delta: -10, max: 10 });
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn scroll_to_clamps() {
        let state = PageReducer::reduce(PageState::default(), PageIntent::ScrollTo { offset: 99, max: 40 });
        assert_eq!(state.scroll, 40);
    }

    #[test]
    fn toggle_projects_flips() {
        let state = PageReducer::reduce(PageState::default(), PageIntent::ToggleProjects);
        assert!(state.show_all_projects);
        let state = PageReducer::reduce(state, PageIntent::ToggleProjects);
        assert!(!state.show_all_projects);
    }

    #[test]
    fn shrinking_max_pulls_scroll_back() {
        let state = PageState {
            scroll: 30,
            ..PageState::default()
        };
        let state = PageReducer::reduce(state, PageIntent::ScrollBy { delta: 0, max: 12 });
        assert_eq!(state.scroll, 12);
    }
}
