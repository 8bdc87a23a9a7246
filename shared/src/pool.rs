//! Read-only content pools, one per slot.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// Morning entry: a named reading plus its message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningFortune {
    pub name: String,
    pub message: String,
}

/// Deep-night entry: a video to play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoClip {
    pub video_url: String,
}

/// Content selected for a draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// Morning reading, shown as a bold name above the text
    Titled { name: String, text: String },
    Plain(String),
}

impl Message {
    /// Markup for the result area.
    ///
    /// Pool entries are application-authored markup (inline `<br>` and the
    /// like) and are embedded verbatim. Never load pools from untrusted input.
    pub fn to_markup(&self) -> String {
        match self {
            Message::Titled { name, text } => format!("<strong>{}</strong><br>{}", name, text),
            Message::Plain(text) => text.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("The {0} pool is empty")]
    Empty(Slot),
    #[error("Failed to parse message data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw dataset layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolData {
    pub morning: Vec<MorningFortune>,
    pub afternoon: Vec<String>,
    pub night: Vec<String>,
    pub deepnight: Vec<VideoClip>,
}

/// The four validated pools. Every pool holds at least one item.
#[derive(Debug, Clone)]
pub struct MessagePools {
    data: PoolData,
}

impl MessagePools {
    pub fn new(data: PoolData) -> Result<Self, PoolError> {
        if data.morning.is_empty() {
            return Err(PoolError::Empty(Slot::Morning));
        }
        if data.afternoon.is_empty() {
            return Err(PoolError::Empty(Slot::Afternoon));
        }
        if data.night.is_empty() {
            return Err(PoolError::Empty(Slot::Night));
        }
        if data.deepnight.is_empty() {
            return Err(PoolError::Empty(Slot::DeepNight));
        }
        Ok(Self { data })
    }

    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        let data: PoolData = serde_json::from_str(json)?;
        Self::new(data)
    }

    pub fn len(&self, slot: Slot) -> usize {
        match slot {
            Slot::Morning => self.data.morning.len(),
            Slot::Afternoon => self.data.afternoon.len(),
            Slot::Night => self.data.night.len(),
            Slot::DeepNight => self.data.deepnight.len(),
        }
    }

    /// Uniform pick from a text pool. Deep night has no text and yields `None`.
    pub fn pick_message<R: Rng>(&self, slot: Slot, rng: &mut R) -> Option<Message> {
        match slot {
            Slot::Morning => {
                let item = &self.data.morning[rng.gen_range(0..self.data.morning.len())];
                Some(Message::Titled { name: item.name.clone(), text: item.message.clone() })
            }
            Slot::Afternoon => {
                let text = &self.data.afternoon[rng.gen_range(0..self.data.afternoon.len())];
                Some(Message::Plain(text.clone()))
            }
            Slot::Night => {
                let text = &self.data.night[rng.gen_range(0..self.data.night.len())];
                Some(Message::Plain(text.clone()))
            }
            Slot::DeepNight => None,
        }
    }

    /// Uniform pick from the deep-night videos
    pub fn pick_video<R: Rng>(&self, rng: &mut R) -> &VideoClip {
        &self.data.deepnight[rng.gen_range(0..self.data.deepnight.len())]
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn sample_pools() -> MessagePools {
        MessagePools::new(PoolData {
            morning: vec![
                MorningFortune { name: "大吉".to_string(), message: "良い流れの一日".to_string() },
                MorningFortune { name: "中吉".to_string(), message: "焦らず進もう".to_string() },
            ],
            afternoon: vec!["ひと息つこう".to_string(), "水を一杯".to_string()],
            night: vec!["今日もおつかれさま".to_string()],
            deepnight: vec![
                VideoClip { video_url: "videos/a.mp4".to_string() },
                VideoClip { video_url: "videos/b.mp4".to_string() },
            ],
        })
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use super::test_utils::sample_pools;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "morning": [{"name": "吉", "message": "穏やかに"}],
            "afternoon": ["休憩"],
            "night": ["おやすみ"],
            "deepnight": [{"videoUrl": "v/1.mp4"}]
        }"#;
        let pools = MessagePools::from_json(json).unwrap();
        assert_eq!(pools.len(Slot::Morning), 1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pools.pick_video(&mut rng).video_url, "v/1.mp4");
        assert_eq!(
            pools.pick_message(Slot::Morning, &mut rng),
            Some(Message::Titled { name: "吉".to_string(), text: "穏やかに".to_string() })
        );
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let json = r#"{"morning": [{"name": "a", "message": "b"}], "afternoon": [], "night": ["x"], "deepnight": [{"videoUrl": "v"}]}"#;
        match MessagePools::from_json(json) {
            Err(PoolError::Empty(slot)) => assert_eq!(slot, Slot::Afternoon),
            other => panic!("expected empty pool error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(MessagePools::from_json("{\"morning\": 3}"), Err(PoolError::Parse(_))));
    }

    #[test]
    fn test_picks_come_from_the_slot_pool() {
        let pools = sample_pools();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            match pools.pick_message(Slot::Afternoon, &mut rng) {
                Some(Message::Plain(text)) => assert!(text == "ひと息つこう" || text == "水を一杯"),
                other => panic!("unexpected pick {:?}", other),
            }
            assert_eq!(pools.pick_message(Slot::Night, &mut rng), Some(Message::Plain("今日もおつかれさま".to_string())));
            assert!(matches!(pools.pick_message(Slot::Morning, &mut rng), Some(Message::Titled { .. })));
        }
        assert_eq!(pools.pick_message(Slot::DeepNight, &mut rng), None);
    }

    #[test]
    fn test_pick_reaches_every_item() {
        let pools = sample_pools();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pools.pick_video(&mut rng).video_url.clone());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_markup_keeps_inline_pool_markup() {
        let message = Message::Titled { name: "大吉".to_string(), text: "良い流れ<br>の一日".to_string() };
        assert_eq!(message.to_markup(), "<strong>大吉</strong><br>良い流れ<br>の一日");
        assert_eq!(
            Message::Plain("今日も<br>おつかれさま".to_string()).to_markup(),
            "今日も<br>おつかれさま"
        );
    }
}
