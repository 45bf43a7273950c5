use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaperProps {
    #[prop_or(1)]
    pub elevation: u8,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Raised surface for page content.
#[function_component(Paper)]
pub(crate) fn paper(props: &PaperProps) -> Html {
    let elevation = format!("elevation-{}", props.elevation.min(4));
    html! {
        <div class={classes!("paper", elevation, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
