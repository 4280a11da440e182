mod api;
mod components;
mod config;
mod state;
mod youtube;

use gloo_console::error;
use yew::prelude::*;

use components::{SearchBar, VideoList, VideoPlayer};
use state::{AppAction, AppState, DEFAULT_QUERY};

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(AppState::default);

    let client = use_memo((), |_| reqwest::Client::new());

    let on_search = {
        let state = state.clone();
        Callback::from(move |raw: String| {
            let Some(query) = state::submitted_query(&raw) else {
                return;
            };
            state.dispatch(AppAction::SearchStarted);
            let state = state.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::search_videos(&client, config::backend_base_url(), &query).await {
                    Ok(items) => state.dispatch(AppAction::SearchSucceeded(items)),
                    Err(err) => {
                        error!("search failed:", err.to_string());
                        state.dispatch(AppAction::SearchFailed);
                    }
                }
            });
        })
    };

    // Populate the list on mount as if the user had searched the default term.
    {
        let on_search = on_search.clone();
        use_effect_with((), move |_| {
            on_search.emit(DEFAULT_QUERY.to_owned());
            || ()
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(AppAction::VideoSelected(id)))
    };

    html! {
        <div class="page">
            <div class="phone">
                <header>
                    <h1>{"YouTube Player"}</h1>
                    <SearchBar {on_search} />
                </header>
                <VideoPlayer video_id={state.current_video_id.clone()} />
                <main class="results">
                    <div class="results-header">
                        <h2>{"Search Results"}</h2>
                        if state.loading {
                            <span class="spinner" aria-label="loading" />
                        }
                    </div>
                    if let Some(message) = state.error {
                        <div class="error">{message}</div>
                    }
                    <VideoList
                        videos={state.results.clone()}
                        current_video_id={state.current_video_id.clone()}
                        {on_select}
                    />
                </main>
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
