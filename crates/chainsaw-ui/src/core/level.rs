//! Fuzzy level picker state.
//!
//! # Design
//! - The four levels are a fixed ordered sequence; draws index into it.
//! - `Unknown` is only an initial sentinel and can never be drawn.
//! - Draws are independent, so repeats are allowed.

use crate::core::random::UniformSource;
use std::fmt::{self, Display, Formatter};

/// One of the fixed fuzzy levels, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// "Fuzzy".
    Fuzzy,
    /// "Chainsaw-y".
    ChainsawY,
    /// "Dangerously Cuddly".
    DangerouslyCuddly,
    /// "Purrfectly Deadly".
    PurrfectlyDeadly,
}

impl Level {
    /// Every level in sequence order.
    pub const ALL: [Self; 4] = [
        Self::Fuzzy,
        Self::ChainsawY,
        Self::DangerouslyCuddly,
        Self::PurrfectlyDeadly,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fuzzy => "Fuzzy",
            Self::ChainsawY => "Chainsaw-y",
            Self::DangerouslyCuddly => "Dangerously Cuddly",
            Self::PurrfectlyDeadly => "Purrfectly Deadly",
        }
    }

    /// Level for a uniform draw in `[0, 1)`.
    #[must_use]
    pub fn from_unit(unit: f64) -> Self {
        Self::ALL[pick_index(unit, Self::ALL.len())]
    }
}

impl Display for Level {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Label shown before the first draw.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Map a draw in `[0, 1)` to an index with `floor(unit * len)`.
///
/// Draws outside the contract (NaN, negative, `>= 1.0`) are clamped into
/// `0..len` so the result always indexes the sequence. Returns `0` when
/// `len` is zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn pick_index(unit: f64, len: usize) -> usize {
    if len == 0 || unit.is_nan() || unit <= 0.0 {
        return 0;
    }
    let scaled = (unit * len as f64).floor();
    if scaled >= len as f64 {
        len - 1
    } else {
        scaled as usize
    }
}

/// Currently displayed level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LevelState {
    /// Nothing drawn yet.
    #[default]
    Unknown,
    /// Result of the latest draw.
    Picked(Level),
}

impl LevelState {
    /// Display label, including the `Unknown` sentinel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => UNKNOWN_LABEL,
            Self::Picked(level) => level.label(),
        }
    }

    /// The drawn level, if any.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        match self {
            Self::Unknown => None,
            Self::Picked(level) => Some(level),
        }
    }

    /// Replace the current value with a fresh uniform draw.
    pub fn pick_random_level<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> Level {
        let level = Level::from_unit(source.next_unit());
        *self = Self::Picked(level);
        level
    }
}

impl Display for LevelState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ScriptedSource;

    #[test]
    fn index_mapping_matches_floor() {
        assert_eq!(pick_index(0.0, 4), 0);
        assert_eq!(pick_index(0.249_999, 4), 0);
        assert_eq!(pick_index(0.25, 4), 1);
        assert_eq!(pick_index(0.5, 4), 2);
        assert_eq!(pick_index(0.75, 4), 3);
        assert_eq!(pick_index(0.999_999, 4), 3);
    }

    #[test]
    fn out_of_contract_draws_are_clamped() {
        assert_eq!(pick_index(1.0, 4), 3);
        assert_eq!(pick_index(7.5, 4), 3);
        assert_eq!(pick_index(-0.5, 4), 0);
        assert_eq!(pick_index(f64::NAN, 4), 0);
        assert_eq!(pick_index(0.5, 0), 0);
    }

    #[test]
    fn labels_follow_sequence_order() {
        let labels: Vec<_> = Level::ALL.iter().map(|level| level.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Fuzzy",
                "Chainsaw-y",
                "Dangerously Cuddly",
                "Purrfectly Deadly"
            ]
        );
        assert!(!labels.contains(&UNKNOWN_LABEL));
    }

    #[test]
    fn pick_replaces_unknown() {
        let mut state = LevelState::default();
        assert_eq!(state.label(), "Unknown");
        let mut source = ScriptedSource::new(vec![0.6]);
        let level = state.pick_random_level(&mut source);
        assert_eq!(level, Level::DangerouslyCuddly);
        assert_eq!(state, LevelState::Picked(Level::DangerouslyCuddly));
        assert_eq!(state.to_string(), "Dangerously Cuddly");
    }

    #[test]
    fn repeated_draws_may_repeat() {
        let mut state = LevelState::Unknown;
        let mut source = ScriptedSource::new(vec![0.1, 0.2]);
        let first = state.pick_random_level(&mut source);
        let second = state.pick_random_level(&mut source);
        assert_eq!(first, Level::Fuzzy);
        assert_eq!(second, Level::Fuzzy);
        assert_eq!(state.level(), Some(Level::Fuzzy));
    }
}
