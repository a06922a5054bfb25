//! Randomized daily events
//!
//! One event fires per day-advance, drawn uniformly from the six kinds.
//! Each kind carries a fixed meter adjustment and a fixed description.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::MetricDeltas;

/// A daily occurrence, independent of user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyEvent {
    UnexpectedWorkload,
    GoodNews,
    MinorIssue,
    RelaxingEvening,
    BadSleep,
    NoMajorEvent,
}

impl DailyEvent {
    pub const ALL: [DailyEvent; 6] = [
        Self::UnexpectedWorkload,
        Self::GoodNews,
        Self::MinorIssue,
        Self::RelaxingEvening,
        Self::BadSleep,
        Self::NoMajorEvent,
    ];

    /// Draw one event uniformly at random
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Fixed meter adjustment for this event
    pub fn deltas(&self) -> MetricDeltas {
        match self {
            Self::UnexpectedWorkload => MetricDeltas { energy: -15, happiness: 0, stress: 20 },
            Self::GoodNews => MetricDeltas { energy: 0, happiness: 25, stress: -5 },
            Self::MinorIssue => MetricDeltas { energy: 0, happiness: 0, stress: 10 },
            Self::RelaxingEvening => MetricDeltas { energy: 0, happiness: 10, stress: -15 },
            Self::BadSleep => MetricDeltas { energy: -20, happiness: -10, stress: 0 },
            Self::NoMajorEvent => MetricDeltas { energy: 0, happiness: 0, stress: 0 },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UnexpectedWorkload => "Unexpected Workload",
            Self::GoodNews => "Good News",
            Self::MinorIssue => "Minor Issue",
            Self::RelaxingEvening => "Relaxing Evening",
            Self::BadSleep => "Bad Sleep",
            Self::NoMajorEvent => "No Major Event",
        }
    }

    /// Message line reported when this event fires
    pub fn description(&self) -> &'static str {
        match self {
            Self::UnexpectedWorkload => "Unexpected workload hit! Stress and energy took a dip.",
            Self::GoodNews => "Received some good news! Feeling much happier.",
            Self::MinorIssue => "A minor issue popped up. Feeling a bit more stressed.",
            Self::RelaxingEvening => "Had a relaxing evening. Stress eased off.",
            Self::BadSleep => "Slept poorly. Energy and mood are low.",
            Self::NoMajorEvent => "A calm day. Nothing major happened.",
        }
    }
}
