//! Ambient host signals read at startup.

use crate::app::dom::log_dom_error;
use crate::core::ambient::ColorSchemeProbe;
use crate::core::contract::PREFERS_DARK_QUERY;
use crate::core::error::{DomError, DomResult};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// `prefers-color-scheme` media query probe. Hosts without media query
/// support report a light preference.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        media_query_matches(PREFERS_DARK_QUERY).unwrap_or_else(|err| {
            log_dom_error("color scheme probe unavailable", &err);
            false
        })
    }
}

fn media_query_matches(query: &'static str) -> DomResult<bool> {
    let window = web_sys::window().ok_or(DomError::NoDocument)?;
    match window.match_media(query) {
        Ok(Some(list)) => Ok(list.matches()),
        Ok(None) | Err(_) => Err(DomError::MediaQuery { query }),
    }
}

pub(crate) fn load_locale() -> LocaleCode {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}
