#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Fuzzy Chainsaw playground front-end.
//! Theme and sidebar toggles, a random level picker and the routed shell
//! hosting them. State machines live in `core` and build natively; rendering
//! and DOM glue are wasm32-only.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::level::{Level, LevelState};
    use crate::core::random::ScriptedSource;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("shell.brand", "Brand"), "Fuzzy Chainsaw");
        assert_eq!(bundle.text("nav.missing_key", "Default"), "Default");
    }

    #[test]
    fn untranslated_titles_keep_english_copy() {
        let bundle = TranslationBundle::new(LocaleCode::Es);
        assert_eq!(bundle.text("home.title", ""), "🪚 Fuzzy Chainsaw 🪚");
    }

    #[test]
    fn picker_reaches_last_level() {
        let mut state = LevelState::default();
        let mut source = ScriptedSource::new(vec![0.99]);
        assert_eq!(
            state.pick_random_level(&mut source),
            Level::PurrfectlyDeadly
        );
    }
}
