use shared::VideoSource;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use crate::services::logging::Logger;
use crate::services::storage::js_reason;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("video element is not mounted")]
    NotMounted,
    #[error("play() was rejected: {0}")]
    Rejected(String),
}

/// Point the element at a new source. Takes effect on the next play.
pub fn load(video: &HtmlVideoElement, source: &VideoSource) {
    video.set_src(&source.url);
    video.set_muted(source.muted);
    video.set_loop(source.looped);
    video.load();
}

/// Start playback and wait until the browser accepts or rejects it
pub async fn play(video: &HtmlVideoElement) -> Result<(), PlaybackError> {
    let promise = video.play().map_err(|e| PlaybackError::Rejected(js_reason(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| PlaybackError::Rejected(js_reason(&e)))
}

pub fn pause(video: &HtmlVideoElement) {
    if let Err(e) = video.pause() {
        Logger::warn_with_component("video", &format!("pause failed: {}", js_reason(&e)));
    }
}

pub fn set_muted(video: &HtmlVideoElement, muted: bool) {
    video.set_muted(muted);
}
