use log::{info, warn};
use rand::Rng;

use crate::clock::Clock;
use crate::config::FortuneConfig;
use crate::gate::{DailyGate, UsageKey};
use crate::pool::{Message, MessagePools, VideoClip};
use crate::slot::{CivilDate, Slot, SlotResolver};
use crate::store::FlagStore;

/// Button text once today's slot has been used
pub const TRY_AGAIN_LABEL: &str = "また次回😊";

/// Result of pressing the draw button
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    /// New content; the slot is now marked used for today
    Fresh { slot: Slot, message: Message },
    /// The slot was already used today
    AlreadyUsed { slot: Slot },
    DeepNight(DeepNightDecision),
}

impl DrawOutcome {
    /// Markup shown in place of a message when the slot is used up
    pub fn placeholder_markup(slot: Slot) -> String {
        format!("今回{}のヒント。<br>{}", slot.label(), TRY_AGAIN_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeepNightDecision {
    /// Today's video has been played; nothing happens
    AlreadyWatched,
    Play(PlaybackRequest),
}

/// Ask the presentation layer to start the deep-night video
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    /// Day the flag is recorded against once playback starts
    pub date: CivilDate,
    /// New source to load. `None` keeps the already loaded video.
    pub source: Option<VideoSource>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoSource {
    pub url: String,
    pub muted: bool,
    pub looped: bool,
}

/// Orchestrates slot resolution, the daily gate and content selection.
pub struct FortuneService<S: FlagStore, C: Clock, R: Rng> {
    config: FortuneConfig,
    resolver: SlotResolver,
    gate: DailyGate<S>,
    pools: MessagePools,
    clock: C,
    rng: R,
    loaded_video: Option<VideoClip>,
}

impl<S: FlagStore, C: Clock, R: Rng> FortuneService<S, C, R> {
    pub fn new(config: FortuneConfig, pools: MessagePools, store: S, clock: C, rng: R) -> Self {
        info!(
            "Creating FortuneService (daily limit: {}, slot override: {:?})",
            config.daily_limit_enabled, config.slot_override
        );
        Self {
            resolver: SlotResolver::new(config.slot_override),
            gate: DailyGate::new(store, config.daily_limit_enabled),
            config,
            pools,
            clock,
            rng,
            loaded_video: None,
        }
    }

    pub fn config(&self) -> &FortuneConfig {
        &self.config
    }

    pub fn current_slot(&self) -> Slot {
        self.resolver.resolve(self.clock.now())
    }

    pub fn today(&self) -> CivilDate {
        self.resolver.civil_date(self.clock.now())
    }

    /// Handle one press of the draw button
    pub fn draw(&mut self) -> DrawOutcome {
        let now = self.clock.now();
        let slot = self.resolver.resolve(now);
        let date = self.resolver.civil_date(now);

        if slot == Slot::DeepNight {
            return DrawOutcome::DeepNight(self.trigger_deep_night(date));
        }

        let key = UsageKey::new(date, slot);
        if self.gate.has_used(&key) {
            info!("Slot {} already used on {}", slot, date);
            return DrawOutcome::AlreadyUsed { slot };
        }

        let Some(message) = self.pools.pick_message(slot, &mut self.rng) else {
            // only deep night has no text pool, and it returned above
            return DrawOutcome::AlreadyUsed { slot };
        };
        self.gate.mark_used(&key);
        info!("Granted fresh {} message for {}", slot, date);
        DrawOutcome::Fresh { slot, message }
    }

    fn trigger_deep_night(&mut self, date: CivilDate) -> DeepNightDecision {
        if self.gate.has_used(&UsageKey::deep_night(date)) {
            info!("Deep-night video already watched on {}", date);
            return DeepNightDecision::AlreadyWatched;
        }

        let source = if self.loaded_video.is_none() || self.config.repick_video_each_trigger {
            let clip = self.pools.pick_video(&mut self.rng).clone();
            info!("Loading deep-night video {}", clip.video_url);
            let source = VideoSource {
                url: clip.video_url.clone(),
                muted: self.config.start_muted,
                looped: false,
            };
            self.loaded_video = Some(clip);
            Some(source)
        } else {
            None
        };

        DeepNightDecision::Play(PlaybackRequest { date, source })
    }

    /// Playback actually began; record today's deep-night flag
    pub fn playback_started(&self, date: CivilDate) {
        info!("Deep-night playback started for {}", date);
        self.gate.mark_used(&UsageKey::deep_night(date));
    }

    /// Playback could not start. The flag stays unset so the user can retry.
    pub fn playback_failed(&self, date: CivilDate, reason: &str) {
        warn!("Deep-night playback failed for {}: {}", date, reason);
    }
}
