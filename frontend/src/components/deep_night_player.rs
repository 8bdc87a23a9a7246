use shared::VideoState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeepNightPlayerProps {
    pub visible: bool,
    pub video: VideoState,
    pub video_ref: NodeRef,
    pub on_toggle_mute: Callback<()>,
    pub on_toggle_playback: Callback<()>,
    pub on_playing_changed: Callback<bool>,
}

/// Video area for the deep-night slot.
///
/// The `<video>` element stays mounted while hidden so sources and playback
/// are driven through `video_ref` rather than attributes.
#[function_component(DeepNightPlayer)]
pub fn deep_night_player(props: &DeepNightPlayerProps) -> Html {
    let on_video_click = {
        let on_toggle_playback = props.on_toggle_playback.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_toggle_playback.emit(());
        })
    };

    let on_play = {
        let on_playing_changed = props.on_playing_changed.clone();
        Callback::from(move |_: Event| on_playing_changed.emit(true))
    };

    let on_pause = {
        let on_playing_changed = props.on_playing_changed.clone();
        Callback::from(move |_: Event| on_playing_changed.emit(false))
    };

    let on_sound_click = {
        let on_toggle_mute = props.on_toggle_mute.clone();
        Callback::from(move |_: MouseEvent| on_toggle_mute.emit(()))
    };

    let on_play_click = {
        let on_toggle_playback = props.on_toggle_playback.clone();
        Callback::from(move |_: MouseEvent| on_toggle_playback.emit(()))
    };

    let style = if props.visible { "display: block;" } else { "display: none;" };

    html! {
        <div id="deepnightArea" class="deepnight-area" {style}>
            <video
                id="deepnightVideo"
                ref={props.video_ref.clone()}
                playsinline={true}
                onclick={on_video_click}
                onplay={on_play}
                onpause={on_pause}
            />
            <div class="deepnight-controls">
                <button id="deepnightSoundBtn" onclick={on_sound_click}>
                    {props.video.sound_button_label()}
                </button>
                <button id="deepnightPlayBtn" onclick={on_play_click}>
                    {props.video.play_button_label()}
                </button>
            </div>
        </div>
    }
}
