//! Study time estimation
//!
//! Base minutes already encode a topic's difficulty, so only the learner's
//! speed and weakness scale them here.

use tracing::debug;

use crate::domain::{SignalSet, SpeedCategory};

/// Time multiplier for slow learners
pub const SLOW_MULTIPLIER: f64 = 1.3;

/// Time multiplier for fast learners
pub const FAST_MULTIPLIER: f64 = 0.8;

/// Weakness scores strictly above this need extra time
pub const WEAKNESS_THRESHOLD: f64 = 0.6;

/// Time multiplier for weak subjects
pub const WEAKNESS_MULTIPLIER: f64 = 1.2;

/// Adjust a topic's base minutes for the learner's signals
///
/// One speed multiplier applies (slow or fast), then the weakness multiplier if
/// the score is above the threshold. The result is rounded half-to-even and
/// never negative.
pub fn adjusted_minutes(base_minutes: f64, signals: &SignalSet) -> u32 {
    let mut minutes = base_minutes;

    match signals.speed {
        SpeedCategory::Slow => minutes *= SLOW_MULTIPLIER,
        SpeedCategory::Fast => minutes *= FAST_MULTIPLIER,
        SpeedCategory::Normal => {}
    }

    if signals.weakness > WEAKNESS_THRESHOLD {
        minutes *= WEAKNESS_MULTIPLIER;
    }

    let rounded = minutes.round_ties_even();
    let result = if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    };

    debug!(%base_minutes, speed = %signals.speed, weakness = %signals.weakness, %result, "adjusted_minutes: computed");
    result
}
