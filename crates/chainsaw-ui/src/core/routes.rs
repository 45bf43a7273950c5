//! Routing definitions for the playground.
use yew_router::prelude::*;

/// Client-side routes. Each renders exactly one page.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing/info page.
    #[at("/")]
    Home,
    /// Theme and button demo.
    #[at("/experiment")]
    Experiment,
    /// Random level picker demo.
    #[at("/randomizer")]
    Randomizer,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes listed in the navigation bar, in display order.
    pub const NAV: [Self; 3] = [Self::Home, Self::Experiment, Self::Randomizer];

    /// Translation key for the navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Experiment => "nav.experiment",
            Self::Randomizer => "nav.randomizer",
            Self::NotFound => "nav.not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn nav_routes_map_to_paths() {
        let paths: Vec<_> = Route::NAV.iter().map(Routable::to_path).collect();
        assert_eq!(paths, vec!["/", "/experiment", "/randomizer"]);
    }

    #[test]
    fn known_paths_are_recognized() {
        assert_eq!(Route::recognize("/experiment"), Some(Route::Experiment));
        assert_eq!(Route::recognize("/randomizer"), Some(Route::Randomizer));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/chainsaws/42"), Some(Route::NotFound));
    }
}
