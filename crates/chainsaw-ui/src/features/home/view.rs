//! Landing page view.

use crate::components::atoms::Paper;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <section class="page home-page">
            <Paper elevation={3}>
                <h1 class="page-title">{bundle.text("home.title", "🪚 Fuzzy Chainsaw 🪚")}</h1>
                <p class="lead">{bundle.text("home.welcome", "")}</p>
                <p class="muted">{bundle.text("home.body", "")}</p>
            </Paper>
        </section>
    }
}
