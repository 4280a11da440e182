//! Bindings for the YouTube IFrame player API and the one-time loader for
//! its script. The script tag and the global `onYouTubeIframeAPIReady` hook
//! are installed at most once per page; every player instance subscribes to
//! the same readiness signal.

use std::cell::RefCell;

use gloo_console::error;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";

#[wasm_bindgen]
extern "C" {
    /// An embedded `YT.Player` instance.
    #[wasm_bindgen(js_namespace = YT)]
    pub type Player;

    #[wasm_bindgen(constructor, js_namespace = YT)]
    fn new(mount: &Element, options: &JsValue) -> Player;

    /// Loads a different video into the existing instance, no reconstruction.
    #[wasm_bindgen(method, js_name = loadVideoById)]
    pub fn load_video_by_id(this: &Player, video_id: &str);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerOptions<'a> {
    video_id: &'a str,
    player_vars: PlayerVars,
}

#[derive(Serialize)]
struct PlayerVars {
    autoplay: u8,
    modestbranding: u8,
    rel: u8,
}

impl Player {
    /// Constructs a player bound to `video_id` inside `mount`.
    pub fn mount(mount: &Element, video_id: &str) -> Result<Player, JsValue> {
        let options = PlayerOptions {
            video_id,
            player_vars: PlayerVars {
                autoplay: 1,
                modestbranding: 1,
                rel: 0,
            },
        };
        let options = serde_json::to_string(&options)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Player::new(mount, &js_sys::JSON::parse(&options)?))
    }
}

enum Loader {
    Idle,
    Loading(Vec<Box<dyn FnOnce()>>),
    Ready,
}

thread_local! {
    static LOADER: RefCell<Loader> = const { RefCell::new(Loader::Idle) };
}

/// Runs `callback` once `YT.Player` is available, injecting the IFrame API
/// script on the first call. If the script never loads, callbacks stay
/// queued and are never invoked.
pub fn on_api_ready(callback: impl FnOnce() + 'static) {
    let mut callback: Option<Box<dyn FnOnce()>> = Some(Box::new(callback));
    let inject = LOADER.with(|cell| {
        let mut loader = cell.borrow_mut();
        match &mut *loader {
            Loader::Ready => false,
            Loader::Loading(waiters) => {
                if let Some(callback) = callback.take() {
                    waiters.push(callback);
                }
                false
            }
            Loader::Idle => {
                if api_already_loaded() {
                    *loader = Loader::Ready;
                    false
                } else {
                    *loader = Loader::Loading(callback.take().into_iter().collect());
                    true
                }
            }
        }
    });
    if inject {
        inject_script();
    }
    if let Some(callback) = callback {
        callback();
    }
}

/// True if some other script already brought in `YT.Player`.
fn api_already_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("YT"))
        .and_then(|yt| js_sys::Reflect::get(&yt, &JsValue::from_str("Player")))
        .map(|player| player.is_function())
        .unwrap_or(false)
}

fn mark_ready() {
    let waiters = LOADER.with(|cell| std::mem::replace(&mut *cell.borrow_mut(), Loader::Ready));
    if let Loader::Loading(waiters) = waiters {
        for waiter in waiters {
            waiter();
        }
    }
}

fn inject_script() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let ready = Closure::once_into_js(mark_ready);
    if let Err(err) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str("onYouTubeIframeAPIReady"),
        &ready,
    ) {
        error!("failed to install the IFrame API ready hook:", err);
        return;
    }
    let script = match document.create_element("script") {
        Ok(script) => script,
        Err(err) => {
            error!("failed to create the IFrame API script tag:", err);
            return;
        }
    };
    if let Err(err) = script.set_attribute("src", IFRAME_API_SRC) {
        error!("failed to set the IFrame API script source:", err);
        return;
    }
    if let Some(head) = document.head() {
        if let Err(err) = head.append_child(&script) {
            error!("failed to append the IFrame API script tag:", err);
        }
    }
}
