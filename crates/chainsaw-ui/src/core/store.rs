//! Shell-level yewdux stores.
//!
//! # Design
//! - One store per toggle so the theme and sidebar never share state.
//! - Reducers are plain methods, tested natively; views only dispatch them.
//! - Nothing is persisted: every page load starts from defaults and the
//!   ambient preference.

use crate::core::sidebar::SidebarState;
use crate::core::theme::ThemeState;
use yewdux::store::Store;

/// Root theme for the application shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub struct ThemeStore {
    /// Active theme.
    pub state: ThemeState,
    /// Whether the ambient preference has been read.
    pub initialized: bool,
}

impl ThemeStore {
    /// Seed the theme from the ambient preference. Only the first call has
    /// an effect.
    pub const fn initialize(&mut self, prefers_dark: bool) {
        if self.initialized {
            return;
        }
        self.state = ThemeState::from_preference(prefers_dark);
        self.initialized = true;
    }

    /// Flip the theme.
    pub const fn toggle(&mut self) -> ThemeState {
        self.state = self.state.toggled();
        self.state
    }
}

/// Sidebar layout for the application shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub struct SidebarStore {
    /// Layout shared by the sidebar and main-content regions.
    pub state: SidebarState,
}

impl SidebarStore {
    /// Flip the layout.
    pub const fn toggle(&mut self) -> SidebarState {
        self.state = self.state.toggled();
        self.state
    }
}
