//! Fixed DOM contract shared by the routed app and the static page.
//!
//! # Design
//! - Element ids and marker classes are part of the page markup contract, so
//!   they live in one place instead of being repeated in views.
//! - There is no runtime configuration; changing a value here changes both
//!   page variants together.

/// Element id the routed app mounts into.
pub const APP_ROOT_ID: &str = "app-root";

/// Sidebar region id.
pub const SIDEBAR_ID: &str = "sidebar";
/// Main content region id.
pub const MAIN_CONTENT_ID: &str = "main-content";
/// Control that collapses and expands the sidebar.
pub const COLLAPSE_BUTTON_ID: &str = "collapse-btn";
/// Control that flips the root theme.
pub const THEME_TOGGLE_BUTTON_ID: &str = "theme-toggle-btn";

/// Root marker carried while the dark theme is active.
pub const DARK_MARKER: &str = "dark-mode";
/// Root marker carried while the light theme is active.
pub const LIGHT_MARKER: &str = "light-mode";
/// Region marker carried by both layout regions while collapsed.
pub const COLLAPSED_MARKER: &str = "collapsed";

/// Media query consulted once at startup for the ambient theme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Region ids that must always agree on the sidebar layout marker.
pub const LAYOUT_REGION_IDS: [&str; 2] = [SIDEBAR_ID, MAIN_CONTENT_ID];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_markers_are_distinct() {
        assert_ne!(DARK_MARKER, LIGHT_MARKER);
        assert_ne!(DARK_MARKER, COLLAPSED_MARKER);
    }

    #[test]
    fn layout_regions_cover_sidebar_and_main() {
        assert_eq!(LAYOUT_REGION_IDS, ["sidebar", "main-content"]);
    }
}
