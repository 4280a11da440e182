use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Invoked with the raw text buffer on submit; trimming and the
    /// blank-query rejection are the caller's policy.
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onsubmit = {
        let query = query.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_search.emit((*query).clone());
        })
    };

    html! {
        <form class="search-bar" {onsubmit}>
            <input
                type="text"
                placeholder="Search videos and channels..."
                value={(*query).clone()}
                {oninput}
            />
            <button type="submit">{"Search"}</button>
        </form>
    }
}
