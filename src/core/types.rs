//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// A wellbeing meter, always in [0, 100]
///
/// Every mutation saturates at the bounds, so a `Meter` can never hold an
/// out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Meter(i32);

impl Meter {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Add a signed delta, saturating at the bounds
    pub fn shift(&mut self, delta: i32) {
        self.0 = (self.0 + delta).clamp(Self::MIN, Self::MAX);
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A signed adjustment to the three meters, applied meter-by-meter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricDeltas {
    pub energy: i32,
    pub happiness: i32,
    pub stress: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_clamps_on_construction() {
        assert_eq!(Meter::new(-10).get(), 0);
        assert_eq!(Meter::new(0).get(), 0);
        assert_eq!(Meter::new(70).get(), 70);
        assert_eq!(Meter::new(150).get(), 100);
    }

    #[test]
    fn test_meter_shift_saturates() {
        let mut m = Meter::new(95);
        m.shift(30);
        assert_eq!(m.get(), 100);

        m.shift(-115);
        assert_eq!(m.get(), 0);

        m.shift(40);
        assert_eq!(m.get(), 40);
    }

    #[test]
    fn test_meter_display() {
        assert_eq!(Meter::new(70).to_string(), "70/100");
        assert_eq!(Meter::new(0).to_string(), "0/100");
    }
}
