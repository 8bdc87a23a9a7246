use log::{debug, warn};
use std::fmt;

use crate::slot::{CivilDate, Slot};
use crate::store::FlagStore;

/// Value written for a consumed flag
pub const USED_VALUE: &str = "1";

/// Storage key of a usage flag.
///
/// Regular slots are keyed `used:<YYYY-MM-DD>:<slot>`, the deep-night video
/// gate is keyed by date alone as `used:deepnight:<YYYY-MM-DD>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsageKey {
    pub date: CivilDate,
    pub slot: Slot,
}

impl UsageKey {
    pub fn new(date: CivilDate, slot: Slot) -> Self {
        Self { date, slot }
    }

    pub fn deep_night(date: CivilDate) -> Self {
        Self { date, slot: Slot::DeepNight }
    }
}

impl fmt::Display for UsageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Slot::DeepNight => write!(f, "used:deepnight:{}", self.date),
            slot => write!(f, "used:{}:{}", self.date, slot),
        }
    }
}

/// Once-per-day gate over a [`FlagStore`].
///
/// Read failures fail open: a flag that cannot be read counts as unused so
/// a broken store never locks the user out.
pub struct DailyGate<S: FlagStore> {
    store: S,
    enabled: bool,
}

impl<S: FlagStore> DailyGate<S> {
    pub fn new(store: S, enabled: bool) -> Self {
        Self { store, enabled }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the flag for `key` is set. Always false when the limit is off.
    pub fn has_used(&self, key: &UsageKey) -> bool {
        if !self.enabled {
            return false;
        }

        let key = key.to_string();
        match self.store.get(&key) {
            Ok(value) => value.as_deref() == Some(USED_VALUE),
            Err(e) => {
                warn!("Treating '{}' as unused, store read failed: {}", key, e);
                false
            }
        }
    }

    /// Set the flag for `key`. Idempotent; write failures are logged only.
    pub fn mark_used(&self, key: &UsageKey) {
        if !self.enabled {
            debug!("Daily limit disabled, not recording {}", key);
            return;
        }

        let key = key.to_string();
        match self.store.set(&key, USED_VALUE) {
            Ok(()) => debug!("Recorded usage flag {}", key),
            Err(e) => warn!("Failed to record usage flag: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_utils::FailingFlagStore;
    use crate::store::MemoryFlagStore;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_key_format() {
        let d = date(2025, 1, 9);
        assert_eq!(UsageKey::new(d, Slot::Morning).to_string(), "used:2025-01-09:morning");
        assert_eq!(UsageKey::new(d, Slot::Afternoon).to_string(), "used:2025-01-09:afternoon");
        assert_eq!(UsageKey::new(d, Slot::Night).to_string(), "used:2025-01-09:night");
        assert_eq!(UsageKey::deep_night(d).to_string(), "used:deepnight:2025-01-09");
        assert_eq!(UsageKey::new(d, Slot::DeepNight), UsageKey::deep_night(d));
    }

    #[test]
    fn test_mark_then_has_used() {
        let gate = DailyGate::new(MemoryFlagStore::new(), true);
        let key = UsageKey::new(date(2025, 1, 9), Slot::Morning);

        assert!(!gate.has_used(&key));
        gate.mark_used(&key);
        assert!(gate.has_used(&key));
        assert_eq!(gate.store().get("used:2025-01-09:morning").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_mark_used_twice_is_harmless() {
        let gate = DailyGate::new(MemoryFlagStore::new(), true);
        let key = UsageKey::new(date(2025, 1, 9), Slot::Night);

        gate.mark_used(&key);
        gate.mark_used(&key);
        assert!(gate.has_used(&key));
        assert_eq!(gate.store().len(), 1);
    }

    #[test]
    fn test_flags_are_per_date_and_slot() {
        let gate = DailyGate::new(MemoryFlagStore::new(), true);
        gate.mark_used(&UsageKey::new(date(2025, 1, 9), Slot::Morning));

        assert!(!gate.has_used(&UsageKey::new(date(2025, 1, 9), Slot::Afternoon)));
        assert!(!gate.has_used(&UsageKey::new(date(2025, 1, 10), Slot::Morning)));
        assert!(!gate.has_used(&UsageKey::deep_night(date(2025, 1, 9))));
    }

    #[test]
    fn test_only_exact_value_counts_as_used() {
        let store = MemoryFlagStore::new();
        store.set("used:2025-01-09:morning", "true").unwrap();
        let gate = DailyGate::new(store, true);
        assert!(!gate.has_used(&UsageKey::new(date(2025, 1, 9), Slot::Morning)));
    }

    #[test]
    fn test_read_failure_fails_open() {
        let store = FailingFlagStore { fail_reads: true, ..Default::default() };
        let key = UsageKey::new(date(2025, 1, 9), Slot::Morning);
        store.inner.set(&key.to_string(), USED_VALUE).unwrap();

        let gate = DailyGate::new(store, true);
        assert!(!gate.has_used(&key));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let gate = DailyGate::new(FailingFlagStore::broken(), true);
        let key = UsageKey::new(date(2025, 1, 9), Slot::Afternoon);
        gate.mark_used(&key);
        assert!(!gate.has_used(&key));
    }

    #[test]
    fn test_disabled_gate_neither_reads_nor_writes() {
        let store = MemoryFlagStore::new();
        let key = UsageKey::new(date(2025, 1, 9), Slot::Morning);
        store.set(&key.to_string(), USED_VALUE).unwrap();

        let gate = DailyGate::new(store, false);
        assert!(!gate.has_used(&key));

        let other = UsageKey::new(date(2025, 1, 9), Slot::Night);
        gate.mark_used(&other);
        assert_eq!(gate.store().len(), 1);
    }
}
