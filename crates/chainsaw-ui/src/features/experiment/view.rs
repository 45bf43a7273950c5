//! Experiment page view: local dark-mode switch and an alert button.

use crate::components::atoms::{Button, Paper, Switch};
use crate::components::foundations::Tone;
use crate::core::theme::ThemeState;
use crate::features::experiment::{ScopedTheme, caption_key, state_for_switch};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::dialogs::alert;
use yew::prelude::*;

#[function_component(ExperimentPage)]
pub(crate) fn experiment_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let theme = use_state(ThemeState::default);
    let scoped = ScopedTheme::for_state(*theme);

    let on_switch = {
        let theme = theme.clone();
        Callback::from(move |checked: bool| theme.set(state_for_switch(checked)))
    };
    let on_click = {
        let message = bundle.text("experiment.engaged", "Chainsaw Engaged! 🪚");
        Callback::from(move |_| alert(&message))
    };

    html! {
        <section class="page experiment-page" data-theme={scoped.data_theme} style={scoped.style}>
            <Paper>
                <h2 class="page-title">{bundle.text("experiment.title", "")}</h2>
                <Switch
                    label={AttrValue::from(bundle.text("experiment.switch_label", "Dark mode"))}
                    checked={theme.is_dark()}
                    onchange={on_switch}
                />
                <p class="caption">{bundle.text(caption_key(*theme), "")}</p>
                <Button tone={Tone::Primary} onclick={on_click}>
                    {bundle.text("experiment.click_me", "Click Me!")}
                </Button>
            </Paper>
        </section>
    }
}
