//! # View State
//!
//! Everything the page shows, as plain data. The service produces
//! [`DrawOutcome`]s; [`ViewState::apply`] turns them into the next view plus
//! the [`VideoCommand`]s the presentation layer has to run against the video
//! element. Nothing here touches the DOM.

use crate::service::{DeepNightDecision, DrawOutcome, VideoSource, TRY_AGAIN_LABEL};
use crate::slot::Slot;

/// Initial text of the draw button
pub const DRAW_LABEL: &str = "メッセージを受け取る";

/// Body class present while the deep-night experience is on screen
pub const DEEP_NIGHT_PLAYING_CLASS: &str = "deepnight-playing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Initial state
    Ready,
    /// Faded after an afternoon/night draw, still clickable
    Ghost,
    /// Removed after a morning draw
    Hidden,
    /// Slot used up for today
    Used,
}

impl ButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Used => TRY_AGAIN_LABEL,
            _ => DRAW_LABEL,
        }
    }

    /// Extra CSS class on the button
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            ButtonState::Ready | ButtonState::Hidden => None,
            ButtonState::Ghost => Some("btn-ghost"),
            ButtonState::Used => Some("used"),
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != ButtonState::Hidden
    }
}

/// Side effects for the video element
#[derive(Debug, Clone, PartialEq)]
pub enum VideoCommand {
    Load(VideoSource),
    Play,
    Pause,
    SetMuted(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoState {
    pub src: Option<String>,
    pub muted: bool,
    pub looped: bool,
    pub playing: bool,
}

impl VideoState {
    pub fn sound_button_label(&self) -> &'static str {
        if self.muted {
            "🔈 音をON"
        } else {
            "🔇 ミュート"
        }
    }

    pub fn play_button_label(&self) -> &'static str {
        if self.playing {
            "⏸ 停止"
        } else {
            "▶ 再生"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub slot: Slot,
    pub result_markup: Option<String>,
    pub button: ButtonState,
    pub deep_night_visible: bool,
    pub deep_night_playing: bool,
    pub video: VideoState,
}

impl ViewState {
    /// Page as first shown: slot theme and guide, nothing drawn yet
    pub fn initial(slot: Slot, start_muted: bool) -> Self {
        Self {
            slot,
            result_markup: None,
            button: ButtonState::Ready,
            deep_night_visible: false,
            deep_night_playing: false,
            video: VideoState { src: None, muted: start_muted, looped: false, playing: false },
        }
    }

    pub fn guide(&self) -> &'static str {
        self.slot.guide()
    }

    /// Container gets `has-result` once something was shown
    pub fn has_result(&self) -> bool {
        self.result_markup.is_some()
    }

    /// Space separated classes for the page body
    pub fn body_classes(&self) -> String {
        let mut classes = vec![self.slot.as_str()];
        if self.deep_night_playing {
            classes.push(DEEP_NIGHT_PLAYING_CLASS);
        }
        classes.join(" ")
    }

    /// Move to the view for `outcome` and return the video work to do
    pub fn apply(&mut self, outcome: &DrawOutcome) -> Vec<VideoCommand> {
        match outcome {
            DrawOutcome::Fresh { slot, message } => {
                self.leave_deep_night(*slot);
                self.result_markup = Some(message.to_markup());
                self.button = match slot {
                    Slot::Morning => ButtonState::Hidden,
                    _ => ButtonState::Ghost,
                };
                vec![VideoCommand::Pause]
            }
            DrawOutcome::AlreadyUsed { slot } => {
                self.leave_deep_night(*slot);
                self.result_markup = Some(DrawOutcome::placeholder_markup(*slot));
                self.button = ButtonState::Used;
                vec![VideoCommand::Pause]
            }
            DrawOutcome::DeepNight(DeepNightDecision::AlreadyWatched) => {
                self.slot = Slot::DeepNight;
                Vec::new()
            }
            DrawOutcome::DeepNight(DeepNightDecision::Play(request)) => {
                self.slot = Slot::DeepNight;
                self.deep_night_visible = true;
                self.deep_night_playing = true;

                let mut commands = Vec::new();
                if let Some(source) = &request.source {
                    self.video.src = Some(source.url.clone());
                    self.video.muted = source.muted;
                    self.video.looped = source.looped;
                    commands.push(VideoCommand::Load(source.clone()));
                }
                commands.push(VideoCommand::Play);
                commands
            }
        }
    }

    fn leave_deep_night(&mut self, slot: Slot) {
        self.slot = slot;
        self.deep_night_visible = false;
        self.deep_night_playing = false;
    }

    /// Element reported play or pause
    pub fn set_playing(&mut self, playing: bool) {
        self.video.playing = playing;
    }

    /// Sound button pressed
    pub fn toggle_mute(&mut self) -> VideoCommand {
        self.video.muted = !self.video.muted;
        VideoCommand::SetMuted(self.video.muted)
    }

    /// Play button or the video itself tapped
    pub fn toggle_playback(&self) -> VideoCommand {
        if self.video.playing {
            VideoCommand::Pause
        } else {
            VideoCommand::Play
        }
    }
}
