use crate::components::foundations::{Tone, Variant, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub tone: Option<Tone>,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub pressed: Option<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        props.variant.as_class(),
        tone_class("btn", props.tone),
        props.class.clone()
    );
    let pressed = props
        .pressed
        .map(|pressed| AttrValue::from(if pressed { "true" } else { "false" }));

    html! {
        <button
            id={props.id.clone()}
            type="button"
            class={classes}
            aria-label={props.aria_label.clone()}
            aria-pressed={pressed}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
