//! Distribution checks for the fuzzy level picker using a seeded RNG.

#![cfg(not(target_arch = "wasm32"))]

use chainsaw_ui::core::level::{Level, LevelState, UNKNOWN_LABEL};
use chainsaw_ui::core::random::{RngSource, ScriptedSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

const DRAWS: usize = 10_000;

#[test]
fn draws_are_uniform_across_levels() {
    let mut source = RngSource::new(StdRng::seed_from_u64(0x00C0_FFEE));
    let mut state = LevelState::default();
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for _ in 0..DRAWS {
        state.pick_random_level(&mut source);
        *counts.entry(state.label()).or_default() += 1;
    }

    assert!(!counts.contains_key(UNKNOWN_LABEL));
    assert_eq!(counts.len(), Level::ALL.len());
    for level in Level::ALL {
        let seen = counts.get(level.label()).copied().unwrap_or_default();
        #[allow(clippy::cast_precision_loss)]
        let share = seen as f64 / DRAWS as f64;
        assert!(
            (0.20..=0.30).contains(&share),
            "{level} drawn {share:.3} of the time"
        );
    }
}

#[test]
fn different_seeds_only_yield_known_levels() {
    for seed in 0..32 {
        let mut source = RngSource::new(StdRng::seed_from_u64(seed));
        let mut state = LevelState::Unknown;
        for _ in 0..64 {
            let level = state.pick_random_level(&mut source);
            assert!(Level::ALL.contains(&level));
            assert_eq!(state.level(), Some(level));
        }
    }
}

#[test]
fn first_pick_leaves_unknown() {
    let mut state = LevelState::default();
    assert_eq!(state.to_string(), UNKNOWN_LABEL);
    let mut source = ScriptedSource::new(vec![0.3]);
    state.pick_random_level(&mut source);
    assert_eq!(state, LevelState::Picked(Level::ChainsawY));
    assert_ne!(state.label(), UNKNOWN_LABEL);
}

#[test]
fn each_quarter_of_the_unit_interval_maps_to_one_level() {
    let mut source = ScriptedSource::new(vec![0.0, 0.26, 0.51, 0.76]);
    let mut state = LevelState::default();
    let picked: Vec<Level> = (0..4)
        .map(|_| state.pick_random_level(&mut source))
        .collect();
    assert_eq!(picked, Level::ALL.to_vec());
}
