//! Randomizer page view.

use crate::components::atoms::{Button, Paper};
use crate::components::foundations::Tone;
use crate::core::level::LevelState;
use crate::core::random::BrowserRandom;
use crate::features::randomizer::level_line;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[function_component(RandomizerPage)]
pub(crate) fn randomizer_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let level = use_state(LevelState::default);

    let on_randomize = {
        let level = level.clone();
        Callback::from(move |_| {
            let mut next = *level;
            next.pick_random_level(&mut BrowserRandom);
            level.set(next);
        })
    };

    html! {
        <section class="page randomizer-page">
            <Paper>
                <h2 class="page-title">{bundle.text("randomizer.title", "")}</h2>
                <p class="level-line" aria-live="polite">{level_line(&bundle, *level)}</p>
                <Button tone={Tone::Secondary} onclick={on_randomize}>
                    {bundle.text("randomizer.randomize", "Randomize!")}
                </Button>
            </Paper>
        </section>
    }
}
