use gloo_console::error;
use web_sys::Element;
use yew::prelude::*;

use crate::youtube;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub video_id: AttrValue,
}

/// Embeds a YouTube player for the requested video. The player instance is
/// constructed once, after the IFrame API script signals readiness, bound to
/// whatever id is current at that moment; later id changes go through
/// `loadVideoById` on that same instance.
#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let mount = use_node_ref();
    let player = use_state(|| None::<youtube::Player>);
    // The readiness signal can arrive after the requested id has moved on
    // (the mount-time search usually resolves first), so the subscription
    // reads the id through this ref instead of capturing it.
    let requested_id = use_mut_ref(|| props.video_id.clone());
    *requested_id.borrow_mut() = props.video_id.clone();

    {
        let mount = mount.clone();
        let player = player.clone();
        let requested_id = requested_id.clone();
        use_effect_with((), move |_| {
            youtube::on_api_ready(move || {
                let Some(element) = mount.cast::<Element>() else {
                    return;
                };
                let video_id = requested_id.borrow().clone();
                match youtube::Player::mount(&element, &video_id) {
                    Ok(instance) => player.set(Some(instance)),
                    Err(err) => error!("failed to construct the player:", err),
                }
            });
            || ()
        });
    }

    // Keyed on materialization too, so an instance constructed late still
    // picks up the current id.
    {
        let player = player.clone();
        use_effect_with(
            (props.video_id.clone(), player.is_some()),
            move |(video_id, _)| {
                if let Some(player) = &*player {
                    player.load_video_by_id(video_id);
                }
                || ()
            },
        );
    }

    // Fixed-size frame, rotated 90 degrees inside a 400px-tall strip.
    html! {
        <div class="player-frame">
            <div class="player-rotated">
                <div class="player-mount" ref={mount} />
            </div>
        </div>
    }
}
