//! Core of the daily fortune widget: slot resolution in JST, the
//! once-per-day usage gate, content pools and the view transitions the
//! frontend applies. No UI toolkit dependency.

pub mod clock;
pub mod config;
pub mod gate;
pub mod pool;
pub mod service;
pub mod slot;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, FortuneConfig};
pub use gate::{DailyGate, UsageKey, USED_VALUE};
pub use pool::{Message, MessagePools, MorningFortune, PoolData, PoolError, VideoClip};
pub use service::{DeepNightDecision, DrawOutcome, FortuneService, PlaybackRequest, VideoSource, TRY_AGAIN_LABEL};
pub use slot::{CivilDate, Slot, SlotResolver, UnknownSlot};
pub use store::{FlagStore, MemoryFlagStore, StoreError};
pub use view::{ButtonState, VideoCommand, VideoState, ViewState};
