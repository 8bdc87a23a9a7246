use std::cell::RefCell;
use std::rc::Rc;

use shared::{CivilDate, DeepNightDecision, DrawOutcome, VideoCommand, ViewState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::services::bootstrap::AppService;
use crate::services::logging::Logger;
use crate::services::video::{self, PlaybackError};

/// Shared handle to the fortune service. Compares by identity.
#[derive(Clone)]
pub struct ServiceHandle(pub Rc<RefCell<AppService>>);

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub struct UseFortuneResult {
    pub view: ViewState,
    pub video_ref: NodeRef,
    pub actions: UseFortuneActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFortuneActions {
    pub draw: Callback<()>,
    pub toggle_mute: Callback<()>,
    pub toggle_playback: Callback<()>,
    pub playing_changed: Callback<bool>,
}

/// Owns the view state and applies service outcomes to it and to the video element
#[hook]
pub fn use_fortune(service: &ServiceHandle) -> UseFortuneResult {
    let view = {
        let service = service.clone();
        use_mut_ref(move || {
            let service = service.0.borrow();
            ViewState::initial(service.current_slot(), service.config().start_muted)
        })
    };
    let video_ref = use_node_ref();
    let update = use_force_update();

    let draw = {
        let service = service.clone();
        let view = view.clone();
        let video_ref = video_ref.clone();
        let update = update.clone();

        use_callback((), move |_: (), _| {
            let outcome = service.0.borrow_mut().draw();
            Logger::debug_with_component("use-fortune", &format!("draw outcome: {:?}", outcome));

            let playback_date = match &outcome {
                DrawOutcome::DeepNight(DeepNightDecision::Play(request)) => Some(request.date),
                _ => None,
            };
            let commands = view.borrow_mut().apply(&outcome);
            update.force_update();

            run_commands(commands, &video_ref, &service, playback_date);
        })
    };

    let toggle_mute = {
        let service = service.clone();
        let view = view.clone();
        let video_ref = video_ref.clone();
        let update = update.clone();

        use_callback((), move |_: (), _| {
            let command = view.borrow_mut().toggle_mute();
            update.force_update();
            run_commands(vec![command], &video_ref, &service, None);
        })
    };

    let toggle_playback = {
        let service = service.clone();
        let view = view.clone();
        let video_ref = video_ref.clone();

        use_callback((), move |_: (), _| {
            let command = view.borrow().toggle_playback();
            run_commands(vec![command], &video_ref, &service, None);
        })
    };

    // the element's play/pause events are the source of truth for the play state
    let playing_changed = {
        let view = view.clone();
        let update = update.clone();

        use_callback((), move |playing: bool, _| {
            view.borrow_mut().set_playing(playing);
            update.force_update();
        })
    };

    let body_classes = view.borrow().body_classes();
    use_effect_with(body_classes, |classes| {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_class_name(classes);
        }
        || ()
    });

    let view = view.borrow().clone();
    UseFortuneResult {
        view,
        video_ref,
        actions: UseFortuneActions {
            draw,
            toggle_mute,
            toggle_playback,
            playing_changed,
        },
    }
}

/// Run video commands. A `Play` carrying `playback_date` reports back to the
/// service so the deep-night flag is only set once playback really started.
fn run_commands(
    commands: Vec<VideoCommand>,
    video_ref: &NodeRef,
    service: &ServiceHandle,
    playback_date: Option<CivilDate>,
) {
    let Some(element) = video_ref.cast::<HtmlVideoElement>() else {
        if let Some(date) = playback_date {
            service.0.borrow().playback_failed(date, &PlaybackError::NotMounted.to_string());
        } else if !commands.is_empty() {
            Logger::warn_with_component("use-fortune", "video element not mounted, skipping video commands");
        }
        return;
    };

    for command in commands {
        match command {
            VideoCommand::Load(source) => video::load(&element, &source),
            VideoCommand::Pause => video::pause(&element),
            VideoCommand::SetMuted(muted) => video::set_muted(&element, muted),
            VideoCommand::Play => {
                let element = element.clone();
                let service = service.clone();
                spawn_local(async move {
                    let result = video::play(&element).await;
                    let Some(date) = playback_date else {
                        if let Err(e) = result {
                            Logger::warn_with_component("use-fortune", &e.to_string());
                        }
                        return;
                    };
                    match result {
                        Ok(()) => {
                            service.0.borrow().playback_started(date);
                        }
                        Err(e) => {
                            service.0.borrow().playback_failed(date, &e.to_string());
                        }
                    }
                });
            }
        }
    }
}
