//! Experiment page feature slice.
//!
//! # Design
//! - The page keeps its own theme, independent of the shell theme, scoped to
//!   the page container.
//! - The container style is a pure projection of that local state.

use crate::core::theme::ThemeState;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

/// Attributes applied to the experiment page container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedTheme {
    /// Value for the container's `data-theme` attribute.
    pub data_theme: &'static str,
    /// Inline style declaring the palette custom properties.
    pub style: String,
}

impl ScopedTheme {
    /// Project a local theme state onto container attributes.
    #[must_use]
    pub fn for_state(state: ThemeState) -> Self {
        Self {
            data_theme: state.as_str(),
            style: state.palette().style_vars(),
        }
    }
}

/// Translation key for the caption under the dark-mode switch.
#[must_use]
pub const fn caption_key(state: ThemeState) -> &'static str {
    match state {
        ThemeState::Light => "experiment.light_enabled",
        ThemeState::Dark => "experiment.dark_enabled",
    }
}

/// Local theme after the switch reports `checked`.
#[must_use]
pub const fn state_for_switch(checked: bool) -> ThemeState {
    ThemeState::from_preference(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn scoped_theme_tracks_state() {
        let dark = ScopedTheme::for_state(ThemeState::Dark);
        assert_eq!(dark.data_theme, "dark");
        assert!(dark.style.contains("--cs-background: #121212;"));
        let light = ScopedTheme::for_state(ThemeState::Light);
        assert_eq!(light.data_theme, "light");
        assert_ne!(light.style, dark.style);
    }

    #[test]
    fn captions_match_state() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            bundle.text(caption_key(ThemeState::Dark), ""),
            "Dark Mode Enabled 🌙"
        );
        assert_eq!(
            bundle.text(caption_key(ThemeState::Light), ""),
            "Light Mode Enabled ☀️"
        );
    }

    #[test]
    fn switch_maps_to_state() {
        assert_eq!(state_for_switch(true), ThemeState::Dark);
        assert_eq!(state_for_switch(false), ThemeState::Light);
    }
}
