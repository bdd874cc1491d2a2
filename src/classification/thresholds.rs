use serde::{Deserialize, Serialize};

/// Cumulative-percentage upper bounds of tiers A and B.
///
/// Everything above `b_upper` is tier C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbcThresholds {
    a_upper: f64,
    b_upper: f64,
}

impl Default for AbcThresholds {
    fn default() -> Self {
        Self {
            a_upper: 80.0,
            b_upper: 95.0,
        }
    }
}

impl AbcThresholds {
    /// `None` unless `0 < a_upper <= b_upper <= 100`.
    pub fn new(a_upper: f64, b_upper: f64) -> Option<Self> {
        let valid = a_upper.is_finite()
            && b_upper.is_finite()
            && a_upper > 0.0
            && a_upper <= b_upper
            && b_upper <= 100.0;
        valid.then_some(Self { a_upper, b_upper })
    }

    pub fn a_upper(&self) -> f64 {
        self.a_upper
    }

    pub fn b_upper(&self) -> f64 {
        self.b_upper
    }
}
