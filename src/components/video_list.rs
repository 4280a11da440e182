use yew::prelude::*;

use crate::api::SearchResultItem;

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<SearchResultItem>,
    pub current_video_id: String,
    pub on_select: Callback<String>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    if props.videos.is_empty() {
        return html! {
            <div class="no-results">
                <p>{"No videos found. Try a different search."}</p>
            </div>
        };
    }

    let rows = props
        .videos
        .iter()
        .map(|video| {
            let class = classes!(
                "video-row",
                (video.id == props.current_video_id).then_some("active"),
            );
            let onclick = {
                let on_select = props.on_select.clone();
                let id = video.id.clone();
                Callback::from(move |_| on_select.emit(id.clone()))
            };
            html! {
                <div key={video.id.clone()} {class} {onclick}>
                    <img class="thumbnail" src={video.thumbnail.clone()} alt={video.title.clone()} />
                    <div class="details">
                        <h3>{ &video.title }</h3>
                        <p>{ &video.channel_title }</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! { <div class="video-list">{rows}</div> }
}
