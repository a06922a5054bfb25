//! User-initiated activities and their fixed meter effects

use serde::{Deserialize, Serialize};

use crate::core::MetricDeltas;

/// An activity the user can perform on the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Activity {
    Exercise,
    Meditate,
    EatHealthy,
    Relax,
    Sleep,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Self::Exercise,
        Self::Meditate,
        Self::EatHealthy,
        Self::Relax,
        Self::Sleep,
    ];

    /// Fixed meter adjustment for this activity
    pub fn deltas(&self) -> MetricDeltas {
        match self {
            Self::Exercise => MetricDeltas { energy: 15, happiness: 10, stress: -10 },
            Self::Meditate => MetricDeltas { energy: 0, happiness: 5, stress: -20 },
            Self::EatHealthy => MetricDeltas { energy: 10, happiness: 5, stress: 0 },
            Self::Relax => MetricDeltas { energy: 5, happiness: 0, stress: -15 },
            Self::Sleep => MetricDeltas { energy: 30, happiness: 5, stress: -10 },
        }
    }

    /// Display name, also the key shown in the activity log
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::Meditate => "Meditate",
            Self::EatHealthy => "Eat Healthy",
            Self::Relax => "Relax",
            Self::Sleep => "Sleep",
        }
    }

    /// Message shown after performing this activity
    pub fn flavor(&self) -> &'static str {
        match self {
            Self::Exercise => "You exercised! Feeling more energetic and happy.",
            Self::Meditate => "You meditated. A wave of calm washes over you.",
            Self::EatHealthy => "You ate a healthy meal. Feeling nourished.",
            Self::Relax => "You took time to relax. Stress levels are dropping.",
            Self::Sleep => "You got good sleep. Ready for a new day!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_deltas() {
        let d = Activity::Exercise.deltas();
        assert_eq!(d.energy, 15);
        assert_eq!(d.happiness, 10);
        assert_eq!(d.stress, -10);
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in Activity::ALL.iter().enumerate() {
            for b in &Activity::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
