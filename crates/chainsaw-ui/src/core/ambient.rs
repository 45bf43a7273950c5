//! Ambient host signals consulted at startup.

/// Read-only source of the host's color scheme preference.
pub trait ColorSchemeProbe {
    /// Whether the host prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

/// Probe with a fixed answer, for tests and hosts without media queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPreference {
    /// Answer returned by [`ColorSchemeProbe::prefers_dark`].
    pub dark: bool,
}

impl FixedPreference {
    /// Probe that always reports a dark preference.
    pub const DARK: Self = Self { dark: true };
    /// Probe that always reports a light preference.
    pub const LIGHT: Self = Self { dark: false };
}

impl ColorSchemeProbe for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}
