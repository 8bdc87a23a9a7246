use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{DeepNightPlayer, DrawButton, FortuneResult};
use hooks::use_fortune::{use_fortune, ServiceHandle};
use services::bootstrap;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    service: ServiceHandle,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let fortune = use_fortune(&props.service);
    let view = &fortune.view;

    let container_class = classes!("container", view.has_result().then_some("has-result"));

    html! {
        <main class={container_class}>
            <p id="guide" class="guide">{view.guide()}</p>
            <DrawButton state={view.button} on_draw={fortune.actions.draw.clone()} />
            <FortuneResult markup={view.result_markup.clone()} />
            <DeepNightPlayer
                visible={view.deep_night_visible}
                video={view.video.clone()}
                video_ref={fortune.video_ref.clone()}
                on_toggle_mute={fortune.actions.toggle_mute.clone()}
                on_toggle_playback={fortune.actions.toggle_playback.clone()}
                on_playing_changed={fortune.actions.playing_changed.clone()}
            />
        </main>
    }
}

#[function_component(Unavailable)]
fn unavailable() -> Html {
    html! {
        <main class="container">
            <p class="guide">{"メッセージを読み込めませんでした。時間をおいて再度お試しください。"}</p>
        </main>
    }
}

fn main() {
    Logger::init(LevelFilter::Info);

    match bootstrap::build_service() {
        Ok(service) => {
            let service = ServiceHandle(Rc::new(RefCell::new(service)));
            yew::Renderer::<App>::with_props(AppProps { service }).render();
        }
        Err(e) => {
            Logger::error_with_component("main", &format!("Failed to load message pools: {}", e));
            yew::Renderer::<Unavailable>::new().render();
        }
    }
}
