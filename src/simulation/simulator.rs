//! The simulator state record and its operations
//!
//! All mutation happens here: activities, the day-advance with its knock-on
//! rules, and reset. Every operation is total; meters clamp themselves, so
//! nothing can fail or leave the state out of range.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::Meter;
use crate::simulation::activity::Activity;
use crate::simulation::events::DailyEvent;

const START_ENERGY: i32 = 70;
const START_HAPPINESS: i32 = 60;
const START_STRESS: i32 = 40;

const WELCOME_MESSAGE: &str = "Welcome to your Health Simulator! Manage your well-being.";
const RESET_MESSAGE: &str = "Simulator reset! Starting a new health journey.";

/// Full simulation state for one session
#[derive(Debug, Clone)]
pub struct Simulator {
    pub day: u32,
    pub energy: Meter,
    pub happiness: Meter,
    pub stress: Meter,
    pub message: String,
    activity_counts: BTreeMap<Activity, u32>,
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Create a fresh session. The seed drives all daily-event draws, so a
    /// fixed seed replays the same sequence of days.
    pub fn new(seed: u64) -> Self {
        Self {
            day: 1,
            energy: Meter::new(START_ENERGY),
            happiness: Meter::new(START_HAPPINESS),
            stress: Meter::new(START_STRESS),
            message: WELCOME_MESSAGE.to_string(),
            activity_counts: BTreeMap::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Perform an activity: apply its deltas, record it, update the message
    pub fn perform(&mut self, activity: Activity) {
        let d = activity.deltas();
        self.energy.shift(d.energy);
        self.happiness.shift(d.happiness);
        self.stress.shift(d.stress);
        self.message = activity.flavor().to_string();
        *self.activity_counts.entry(activity).or_insert(0) += 1;
    }

    /// Advance to the next day with a randomly drawn event
    pub fn advance_day(&mut self) {
        let event = DailyEvent::sample(&mut self.rng);
        self.advance_day_with(event);
    }

    /// Advance to the next day with a specific event
    ///
    /// The three knock-on rules fire after the event, in this order, each
    /// reading the meters as left by the previous rule:
    /// 1. stress > 70 drains happiness
    /// 2. low energy feeds stress
    /// 3. low happiness drains energy
    pub fn advance_day_with(&mut self, event: DailyEvent) {
        self.day += 1;

        let d = event.deltas();
        self.energy.shift(d.energy);
        self.happiness.shift(d.happiness);
        self.stress.shift(d.stress);

        if self.stress.get() > 70 {
            self.happiness.shift(-5);
        }
        if self.energy.get() < 30 {
            self.stress.shift(5);
        }
        if self.happiness.get() < 40 {
            self.energy.shift(-5);
        }

        self.message = format!("Day {}: {}", self.day, event.description());

        tracing::debug!(day = self.day, event = event.name(), "advanced day");
    }

    /// Restore the initial state and clear the activity tally
    pub fn reset(&mut self) {
        self.day = 1;
        self.energy = Meter::new(START_ENERGY);
        self.happiness = Meter::new(START_HAPPINESS);
        self.stress = Meter::new(START_STRESS);
        self.message = RESET_MESSAGE.to_string();
        self.activity_counts.clear();

        tracing::info!("simulator reset");
    }

    /// Recorded activity tally, keyed by activity
    pub fn activity_counts(&self) -> &BTreeMap<Activity, u32> {
        &self.activity_counts
    }

    /// Activities with their counts, in lexicographic label order
    pub fn activity_log(&self) -> Vec<(Activity, u32)> {
        let mut entries: Vec<_> = self
            .activity_counts
            .iter()
            .map(|(a, c)| (*a, *c))
            .collect();
        entries.sort_by_key(|(a, _)| a.label());
        entries
    }

    /// The strictly most performed activity, or `None` when nothing has
    /// been recorded. Ties go to the lexicographically first label.
    pub fn most_frequent_activity(&self) -> Option<(Activity, u32)> {
        let mut best: Option<(Activity, u32)> = None;
        for (activity, count) in self.activity_log() {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((activity, count));
            }
        }
        best
    }
}
