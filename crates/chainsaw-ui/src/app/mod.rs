use crate::components::locale_menu::LocaleMenu;
use crate::components::shell::AppShell;
use crate::core::ambient::ColorSchemeProbe;
use crate::core::contract::APP_ROOT_ID;
use crate::core::routes::Route;
use crate::core::sidebar::SidebarState;
use crate::core::store::{SidebarStore, ThemeStore};
use crate::core::theme::{ThemeState, apply_theme};
use crate::features::experiment::view::ExperimentPage;
use crate::features::home::view::HomePage;
use crate::features::randomizer::view::RandomizerPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use dom::{body, element_by_id, log_dom_error, set_attribute};
use environment::{MediaQueryProbe, load_locale};
use gloo::console;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

mod dom;
mod environment;
mod static_page;

#[function_component(PlaygroundApp)]
fn playground_app() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let (theme, theme_dispatch) = use_store::<ThemeStore>();
    let (sidebar, sidebar_dispatch) = use_store::<SidebarStore>();

    {
        let state = theme.state;
        use_effect_with_deps(
            move |state| {
                apply_root_theme(*state);
                || ()
            },
            state,
        );
    }

    let toggle_theme = theme_dispatch.reduce_mut_callback(|store| {
        store.toggle();
    });
    let toggle_sidebar = sidebar_dispatch.reduce_mut_callback(|store| {
        store.toggle();
    });
    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };

    let locale_selector = html! {
        <LocaleMenu
            locale={*locale}
            label={AttrValue::from(bundle.text("shell.locale", "Language"))}
            on_select={set_locale}
        />
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <BrowserRouter>
                <RoutedShell
                    theme={theme.state}
                    on_toggle_theme={toggle_theme}
                    sidebar={sidebar.state}
                    on_toggle_sidebar={toggle_sidebar}
                    locale_selector={locale_selector}
                />
            </BrowserRouter>
        </ContextProvider<TranslationBundle>>
    }
}

#[derive(Properties, PartialEq)]
struct RoutedShellProps {
    theme: ThemeState,
    on_toggle_theme: Callback<()>,
    sidebar: SidebarState,
    on_toggle_sidebar: Callback<()>,
    locale_selector: Html,
}

/// Shell rendered inside the router so it can read the active route.
#[function_component(RoutedShell)]
fn routed_shell(props: &RoutedShellProps) -> Html {
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    html! {
        <AppShell
            theme={props.theme}
            on_toggle_theme={props.on_toggle_theme.clone()}
            sidebar={props.sidebar}
            on_toggle_sidebar={props.on_toggle_sidebar.clone()}
            active={active}
            locale_selector={props.locale_selector.clone()}
        >
            <Switch<Route> render={switch} />
        </AppShell>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Experiment => html! { <ExperimentPage /> },
        Route::Randomizer => html! { <RandomizerPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="placeholder">
            <h2>{bundle.text("placeholder.not_found_title", "Not found")}</h2>
            <p class="muted">{bundle.text("placeholder.not_found_body", "")}</p>
        </div>
    }
}

fn apply_root_theme(state: ThemeState) {
    match body() {
        Ok(body) => {
            let root: &Element = body.as_ref();
            if let Err(err) = apply_theme(root, state) {
                log_dom_error("root theme not applied", &err);
            }
            set_attribute(root, "data-theme", state.as_str());
        }
        Err(err) => log_dom_error("root theme not applied", &err),
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
///
/// Mounts the routed app when the page provides its root element, otherwise
/// binds the static page controls.
pub fn run_app() {
    console_error_panic_hook::set_once();
    match element_by_id(APP_ROOT_ID) {
        Ok(root) => {
            let prefers_dark = MediaQueryProbe.prefers_dark();
            Dispatch::<ThemeStore>::new().reduce_mut(|store| {
                store.initialize(prefers_dark);
            });
            console::debug!("mounting playground app", prefers_dark);
            yew::Renderer::<PlaygroundApp>::with_root(root).render();
        }
        Err(_) => {
            console::debug!("app root absent, binding static page controls");
            static_page::bind_static_page();
        }
    }
}
