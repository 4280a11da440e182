use std::rc::Rc;

use yew::Reducible;

use crate::api::SearchResultItem;

/// Shown before the first search resolves so the player always has something
/// to load.
pub const DEFAULT_VIDEO_ID: &str = "dQw4w9WgXcQ";

/// Term the controller searches for on mount, as if the user had typed it.
pub const DEFAULT_QUERY: &str = "gaming";

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search videos. Please try again.";

/// Trims a submitted query; blank or whitespace-only input is rejected and
/// must cause no request and no state change.
pub fn submitted_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, PartialEq)]
pub struct AppState {
    pub results: Vec<SearchResultItem>,
    pub current_video_id: String,
    pub loading: bool,
    pub error: Option<&'static str>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            results: vec![],
            current_video_id: DEFAULT_VIDEO_ID.to_owned(),
            loading: false,
            error: None,
        }
    }
}

pub enum AppAction {
    SearchStarted,
    SearchSucceeded(Vec<SearchResultItem>),
    SearchFailed,
    VideoSelected(String),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::SearchStarted => {
                next.loading = true;
                next.error = None;
            }
            AppAction::SearchSucceeded(items) => {
                // An empty result set keeps the previously playing video.
                if let Some(first) = items.first() {
                    next.current_video_id = first.id.clone();
                }
                next.results = items;
                next.loading = false;
            }
            AppAction::SearchFailed => {
                next.loading = false;
                next.error = Some(SEARCH_FAILED_MESSAGE);
            }
            AppAction::VideoSelected(id) => {
                next.current_video_id = id;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_owned(),
            title: format!("title for {id}"),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/default.jpg"),
            channel_title: "some channel".to_owned(),
        }
    }

    fn reduce(state: AppState, action: AppAction) -> AppState {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(submitted_query(""), None);
        assert_eq!(submitted_query("   "), None);
        assert_eq!(submitted_query("\t\n"), None);
        assert_eq!(submitted_query("  cats "), Some("cats".to_owned()));
    }

    #[test]
    fn search_start_sets_loading_and_clears_error() {
        let prior = AppState {
            error: Some(SEARCH_FAILED_MESSAGE),
            ..AppState::default()
        };
        let state = reduce(prior, AppAction::SearchStarted);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.current_video_id, DEFAULT_VIDEO_ID);
    }

    #[test]
    fn nonempty_results_select_the_first_video() {
        let loading = reduce(AppState::default(), AppAction::SearchStarted);
        let state = reduce(
            loading,
            AppAction::SearchSucceeded(vec![item("abc"), item("def")]),
        );
        assert_eq!(state.current_video_id, "abc");
        assert_eq!(state.results.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn empty_results_keep_the_current_video() {
        let prior = reduce(
            AppState::default(),
            AppAction::SearchSucceeded(vec![item("abc")]),
        );
        let state = reduce(prior, AppAction::SearchSucceeded(vec![]));
        assert_eq!(state.current_video_id, "abc");
        assert!(state.results.is_empty());
    }

    #[test]
    fn failure_surfaces_the_static_message_and_keeps_results() {
        let prior = reduce(
            AppState::default(),
            AppAction::SearchSucceeded(vec![item("abc")]),
        );
        let loading = reduce(prior, AppAction::SearchStarted);
        let state = reduce(loading, AppAction::SearchFailed);
        assert_eq!(state.error, Some(SEARCH_FAILED_MESSAGE));
        assert!(!state.loading);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.current_video_id, "abc");
    }

    #[test]
    fn selection_changes_only_the_current_video() {
        let prior = reduce(
            AppState::default(),
            AppAction::SearchSucceeded(vec![item("abc"), item("def")]),
        );
        let state = reduce(prior.clone(), AppAction::VideoSelected("def".to_owned()));
        assert_eq!(state.current_video_id, "def");
        assert_eq!(state.results, prior.results);
        assert_eq!(state.loading, prior.loading);
        assert_eq!(state.error, prior.error);
    }

    #[test]
    fn selection_during_a_pending_search_is_overwritten_on_resolution() {
        // Last write wins: no cancellation of in-flight searches.
        let loading = reduce(AppState::default(), AppAction::SearchStarted);
        let selected = reduce(loading, AppAction::VideoSelected("def".to_owned()));
        assert_eq!(selected.current_video_id, "def");
        assert!(selected.loading);
        let state = reduce(
            selected,
            AppAction::SearchSucceeded(vec![item("ghi"), item("def")]),
        );
        assert_eq!(state.current_video_id, "ghi");
    }

    #[test]
    fn startup_search_replaces_the_default_video() {
        // The player must end up on the first result even though it seeds
        // from the default id before the mount-time search resolves.
        let idle = AppState::default();
        assert_eq!(idle.current_video_id, DEFAULT_VIDEO_ID);
        let loading = reduce(idle, AppAction::SearchStarted);
        assert_eq!(loading.current_video_id, DEFAULT_VIDEO_ID);
        let state = reduce(
            loading,
            AppAction::SearchSucceeded(vec![item("abc"), item("def")]),
        );
        assert_eq!(state.current_video_id, "abc");
    }

    #[test]
    fn loading_spans_dispatch_to_resolution() {
        let idle = AppState::default();
        assert!(!idle.loading);
        let loading = reduce(idle, AppAction::SearchStarted);
        assert!(loading.loading);
        let selected = reduce(loading, AppAction::VideoSelected("def".to_owned()));
        assert!(selected.loading);
        let resolved = reduce(selected, AppAction::SearchSucceeded(vec![]));
        assert!(!resolved.loading);
    }
}
