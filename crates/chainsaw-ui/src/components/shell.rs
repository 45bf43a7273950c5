//! Application shell: top bar, collapsible sidebar and main content region.
//!
//! # Design
//! - Both layout regions read the same `SidebarState`, so they always agree.
//! - The shell owns no state; toggles are emitted to the caller's stores.
//! - Region and control ids follow the page contract so the static page and
//!   the routed app share styles.

use crate::components::atoms::Button;
use crate::components::foundations::Variant;
use crate::core::contract::{
    COLLAPSE_BUTTON_ID, MAIN_CONTENT_ID, SIDEBAR_ID, THEME_TOGGLE_BUTTON_ID,
};
use crate::core::routes::Route;
use crate::core::sidebar::SidebarState;
use crate::core::theme::ThemeState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeState,
    pub on_toggle_theme: Callback<()>,
    pub sidebar: SidebarState,
    pub on_toggle_sidebar: Callback<()>,
    pub active: Route,
    pub locale_selector: Html,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let marker = props.sidebar.marker();
    let collapsed = props.sidebar.is_collapsed();
    let collapse_label = if collapsed {
        bundle.text("shell.expand", "Expand sidebar")
    } else {
        bundle.text("shell.collapse", "Collapse sidebar")
    };
    let theme_label = if props.theme.is_dark() {
        bundle.text("shell.theme_dark", "Dark")
    } else {
        bundle.text("shell.theme_light", "Light")
    };
    let on_collapse = props.on_toggle_sidebar.reform(|_: MouseEvent| ());
    let on_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <header class="topbar">
                <strong class="brand">{bundle.text("shell.brand", "Fuzzy Chainsaw")}</strong>
                <span class="muted">{bundle.text("shell.tagline", "")}</span>
                <div class="top-actions">
                    <Button
                        id={AttrValue::from(THEME_TOGGLE_BUTTON_ID)}
                        variant={Variant::Outlined}
                        aria_label={AttrValue::from(bundle.text("shell.toggle_theme", "Toggle theme"))}
                        pressed={Some(props.theme.is_dark())}
                        onclick={on_theme}
                    >
                        {if props.theme.is_dark() { "🌙 " } else { "☀️ " }}{theme_label}
                    </Button>
                </div>
            </header>
            <div class="layout">
                <aside id={SIDEBAR_ID} class={classes!("sidebar", marker)}>
                    <Button
                        id={AttrValue::from(COLLAPSE_BUTTON_ID)}
                        variant={Variant::Text}
                        aria_label={AttrValue::from(collapse_label)}
                        pressed={Some(collapsed)}
                        onclick={on_collapse}
                    >
                        {if collapsed { "»" } else { "«" }}
                    </Button>
                    <nav>
                        {for Route::NAV.iter().map(|route| nav_item(*route, &bundle.text(route.label_key(), ""), props.active))}
                    </nav>
                    <div class="sidebar-footer">
                        {props.locale_selector.clone()}
                    </div>
                </aside>
                <main id={MAIN_CONTENT_ID} class={classes!("main-content", marker)}>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: Route) -> Html {
    let classes = classes!(
        "nav-item",
        if active == route {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label.to_string()}</Link<Route>>
    }
}
