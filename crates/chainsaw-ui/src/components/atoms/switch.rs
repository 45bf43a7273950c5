use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SwitchProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Switch)]
pub(crate) fn switch(props: &SwitchProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="switch">
            <input
                type="checkbox"
                role="switch"
                class={classes!("switch-input", props.class.clone())}
                checked={props.checked}
                onchange={onchange}
            />
            <span class="switch-track" aria-hidden="true"></span>
            {props.label.clone().map(|text| html! { <span class="switch-label">{text}</span> }).unwrap_or_default()}
        </label>
    }
}
