use serde::{Deserialize, Serialize};

/// Judgement of a single hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HitResult {
    Miss,
    Meh,
    Ok,
    Good,
    Great,
    Perfect,
}

/// One recorded input judgement with its timing error.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    /// Milliseconds early (negative) or late (positive) relative to the
    /// object's perfect time.
    pub time_offset: f64,
    pub result: HitResult,
}

/// A completed play, as delivered by the score store / API.
///
/// Identity matters more than equality here: panels compare bound scores by
/// `Arc` pointer, never by value, so two equal payloads remain two scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: u64,
    pub user: String,
    pub total_score: u64,
    pub accuracy: f64,
    pub max_combo: u32,
    /// Per-hit timing history. Empty for scores imported without replay
    /// data; statistics that need it degrade to placeholders.
    #[serde(default)]
    pub hit_events: Vec<HitEvent>,
}

impl Score {
    #[inline]
    pub fn has_hit_events(&self) -> bool {
        !self.hit_events.is_empty()
    }
}

/// Beatmap in playable form, resolved per score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableBeatmap {
    pub title: String,
    pub overall_difficulty: f32,
    pub object_count: usize,
}
