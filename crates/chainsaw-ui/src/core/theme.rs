//! Theme state, its marker projection and the palette tokens used by pages.

use crate::core::ambient::ColorSchemeProbe;
use crate::core::contract::{DARK_MARKER, LIGHT_MARKER};
use crate::core::error::DomResult;
use crate::core::surface::{ClassTarget, MarkerPatch};

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// CSS custom property suffix (e.g. "background").
    pub name: &'static str,
    /// Hex RGB value.
    pub hex: &'static str,
}

/// Surface and brand colors for one theme state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Tokens in declaration order.
    pub tokens: &'static [ColorToken],
}

impl Palette {
    /// Inline style declaring every token as a `--cs-*` custom property.
    #[must_use]
    pub fn style_vars(&self) -> String {
        self.tokens
            .iter()
            .map(|token| format!("--cs-{}: {};", token.name, token.hex))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hex value for a token name.
    #[must_use]
    pub fn hex(&self, name: &str) -> Option<&'static str> {
        self.tokens
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Palette applied while the light theme is active.
pub const LIGHT_PALETTE: Palette = Palette {
    id: "light",
    tokens: &[
        ColorToken {
            name: "background",
            hex: "#FFFFFF",
        },
        ColorToken {
            name: "paper",
            hex: "#FFFFFF",
        },
        ColorToken {
            name: "text",
            hex: "#1F1A17",
        },
        ColorToken {
            name: "primary",
            hex: "#1976D2",
        },
        ColorToken {
            name: "secondary",
            hex: "#9C27B0",
        },
    ],
};

/// Palette applied while the dark theme is active.
pub const DARK_PALETTE: Palette = Palette {
    id: "dark",
    tokens: &[
        ColorToken {
            name: "background",
            hex: "#121212",
        },
        ColorToken {
            name: "paper",
            hex: "#1E1E1E",
        },
        ColorToken {
            name: "text",
            hex: "#F5F1EE",
        },
        ColorToken {
            name: "primary",
            hex: "#90CAF9",
        },
        ColorToken {
            name: "secondary",
            hex: "#CE93D8",
        },
    ],
};

const LIGHT_PATCH: MarkerPatch = MarkerPatch {
    add: &[LIGHT_MARKER],
    remove: &[DARK_MARKER],
};

const DARK_PATCH: MarkerPatch = MarkerPatch {
    add: &[DARK_MARKER],
    remove: &[LIGHT_MARKER],
};

/// Light or dark display mode. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeState {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeState {
    /// Map the ambient "prefers dark" signal onto a state.
    #[must_use]
    pub const fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// The complementary state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// String identifier used in `data-theme` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether the dark theme is active.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Root marker class for this state.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Light => LIGHT_MARKER,
            Self::Dark => DARK_MARKER,
        }
    }

    /// Marker changes that leave the root carrying this state's marker only.
    #[must_use]
    pub const fn marker_patch(self) -> MarkerPatch {
        match self {
            Self::Light => LIGHT_PATCH,
            Self::Dark => DARK_PATCH,
        }
    }

    /// Palette tokens for this state.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT_PALETTE,
            Self::Dark => DARK_PALETTE,
        }
    }
}

/// Apply `state` to the root surface.
///
/// # Errors
/// Returns an error when the surface rejects a class-list update.
pub fn apply_theme<T: ClassTarget + ?Sized>(root: &T, state: ThemeState) -> DomResult<()> {
    state.marker_patch().apply(root)
}

/// Theme toggle machine bound to a root surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeToggle {
    state: ThemeState,
}

impl ThemeToggle {
    /// Read the ambient preference once and apply the resulting state.
    ///
    /// The state is set even when the surface update fails; the second
    /// element carries that outcome so callers can log it.
    pub fn initialize_theme<P, T>(probe: &P, root: &T) -> (Self, DomResult<()>)
    where
        P: ColorSchemeProbe + ?Sized,
        T: ClassTarget + ?Sized,
    {
        let toggle = Self {
            state: ThemeState::from_preference(probe.prefers_dark()),
        };
        let applied = apply_theme(root, toggle.state);
        (toggle, applied)
    }

    /// Flip the state and reapply it to the root surface.
    ///
    /// # Errors
    /// Returns an error when the surface rejects a class-list update; the
    /// state has already been flipped.
    pub fn toggle_theme<T: ClassTarget + ?Sized>(&mut self, root: &T) -> DomResult<ThemeState> {
        self.state = self.state.toggled();
        apply_theme(root, self.state)?;
        Ok(self.state)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ThemeState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ambient::FixedPreference;
    use crate::core::surface::MemoryClassList;

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(ThemeState::Light.toggled(), ThemeState::Dark);
        assert_eq!(ThemeState::Light.toggled().toggled(), ThemeState::Light);
    }

    #[test]
    fn theme_state_to_str() {
        assert_eq!(ThemeState::Light.as_str(), "light");
        assert_eq!(ThemeState::Dark.as_str(), "dark");
    }

    #[test]
    fn initialize_follows_preference() {
        let root = MemoryClassList::new();
        let (toggle, applied) = ThemeToggle::initialize_theme(&FixedPreference::DARK, &root);
        assert!(applied.is_ok());
        assert_eq!(toggle.state(), ThemeState::Dark);
        assert_eq!(root.classes(), vec!["dark-mode"]);

        let root = MemoryClassList::new();
        let (toggle, _) = ThemeToggle::initialize_theme(&FixedPreference::LIGHT, &root);
        assert_eq!(toggle.state(), ThemeState::Light);
        assert_eq!(root.classes(), vec!["light-mode"]);
    }

    #[test]
    fn toggle_twice_restores_markers() {
        let root = MemoryClassList::with_classes(&["shell"]);
        let (mut toggle, _) = ThemeToggle::initialize_theme(&FixedPreference::LIGHT, &root);
        let before = root.classes();
        assert_eq!(toggle.toggle_theme(&root), Ok(ThemeState::Dark));
        assert_eq!(root.classes(), vec!["dark-mode", "shell"]);
        assert_eq!(toggle.toggle_theme(&root), Ok(ThemeState::Light));
        assert_eq!(root.classes(), before);
    }

    #[test]
    fn apply_clears_stale_opposite_marker() {
        let root = MemoryClassList::with_classes(&["dark-mode", "light-mode"]);
        apply_theme(&root, ThemeState::Dark).expect("memory list never fails");
        assert_eq!(root.classes(), vec!["dark-mode"]);
    }

    #[test]
    fn palettes_declare_the_same_tokens() {
        let light: Vec<_> = LIGHT_PALETTE.tokens.iter().map(|t| t.name).collect();
        let dark: Vec<_> = DARK_PALETTE.tokens.iter().map(|t| t.name).collect();
        assert_eq!(light, dark);
        assert_eq!(ThemeState::Dark.palette().hex("background"), Some("#121212"));
    }

    #[test]
    fn style_vars_use_custom_properties() {
        let vars = ThemeState::Light.palette().style_vars();
        assert!(vars.starts_with("--cs-background: #FFFFFF;"));
        assert!(vars.contains("--cs-primary: #1976D2;"));
    }
}
