//! Locale selection control used in the sidebar footer.
//!
//! # Design
//! - Selection state is owned by the caller; the menu only emits the choice.
//! - Unknown option values are ignored.

use crate::i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub label: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                    on_select.emit(next);
                }
            }
        })
    };

    html! {
        <label class="locale-menu">
            <small>{props.label.clone()}</small>
            <select value={props.locale.code()} onchange={onchange}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == props.locale}>{lc.label()}</option>
                })}
            </select>
        </label>
    }
}
