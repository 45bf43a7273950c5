//! Randomizer page feature slice.
//!
//! # Design
//! - The page owns its `LevelState`; each click replaces it with a fresh draw.
//! - The random source is injected so the view never calls `Math.random`
//!   directly.

use crate::core::level::LevelState;
use crate::i18n::TranslationBundle;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Status line shown above the randomize button.
#[must_use]
pub fn level_line(bundle: &TranslationBundle, state: LevelState) -> String {
    format!(
        "{} {}",
        bundle.text("randomizer.level_label", "Fuzzy Level:"),
        state.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn line_shows_unknown_before_first_draw() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            level_line(&bundle, LevelState::Unknown),
            "Fuzzy Level: Unknown"
        );
    }

    #[test]
    fn line_keeps_level_labels_untranslated() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        let line = level_line(&bundle, LevelState::Picked(Level::PurrfectlyDeadly));
        assert!(line.ends_with("Purrfectly Deadly"));
    }
}
