use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offset of Japan Standard Time from UTC, in seconds. JST has no DST.
pub const JST_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Fixed zone every slot and date computation is made in.
pub fn jst() -> FixedOffset {
    // east_opt only fails outside +/-24h
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Time-of-day bucket that decides which content is shown.
///
/// Serde goes through [`FromStr`], so config files accept the same spellings
/// as the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Slot {
    /// 06:00 - 11:59
    Morning,
    /// 12:00 - 17:59
    Afternoon,
    /// 18:00 - 23:59
    Night,
    /// 00:00 - 05:59, the video slot
    DeepNight,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Morning, Slot::Afternoon, Slot::Night, Slot::DeepNight];

    /// Map an hour of the day (0-23) onto its slot. Lower bounds are inclusive.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Slot::DeepNight,
            6..=11 => Slot::Morning,
            12..=17 => Slot::Afternoon,
            _ => Slot::Night,
        }
    }

    /// Stable name used in storage keys and as the page body class
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Morning => "morning",
            Slot::Afternoon => "afternoon",
            Slot::Night => "night",
            Slot::DeepNight => "deepnight",
        }
    }

    /// Short Japanese label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Morning => "朝",
            Slot::Afternoon => "昼",
            Slot::Night => "夜",
            Slot::DeepNight => "深夜",
        }
    }

    /// Guidance line displayed above the draw button
    pub fn guide(&self) -> &'static str {
        match self {
            Slot::Morning => "☀️ 本日の流れ",
            Slot::Afternoon => "🌤 軽いヒント",
            Slot::Night => "🌙 ねぎらい／問いかけ",
            Slot::DeepNight => "🌑 静かなメッセージ",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown slot name: '{0}'")]
pub struct UnknownSlot(pub String);

impl FromStr for Slot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Slot::Morning),
            "afternoon" => Ok(Slot::Afternoon),
            "night" => Ok(Slot::Night),
            "deepnight" => Ok(Slot::DeepNight),
            _ => Err(UnknownSlot(s.to_string())),
        }
    }
}

impl TryFrom<String> for Slot {
    type Error = UnknownSlot;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.as_str().to_string()
    }
}

/// Calendar day in JST. Only ever used as a key component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    pub fn from_timestamp(now: DateTime<Utc>) -> Self {
        Self(now.with_timezone(&jst()).date_naive())
    }

    #[cfg(test)]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Resolves the current slot, honouring an explicit override.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotResolver {
    slot_override: Option<Slot>,
}

impl SlotResolver {
    pub fn new(slot_override: Option<Slot>) -> Self {
        Self { slot_override }
    }

    /// Slot for `now`. With an override set the timestamp is ignored.
    pub fn resolve(&self, now: DateTime<Utc>) -> Slot {
        match self.slot_override {
            Some(slot) => slot,
            None => Slot::from_hour(jst_hour(now)),
        }
    }

    pub fn civil_date(&self, now: DateTime<Utc>) -> CivilDate {
        CivilDate::from_timestamp(now)
    }
}

/// Hour of the day (0-23) in JST
pub fn jst_hour(now: DateTime<Utc>) -> u32 {
    now.with_timezone(&jst()).hour()
}
