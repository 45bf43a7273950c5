//! Sidebar collapse state and its projection onto the two layout regions.
//!
//! # Design
//! - One state value drives both regions, so they cannot disagree.
//! - Both regions are patched inside the same synchronous call; the browser
//!   paints them together.

use crate::core::contract::COLLAPSED_MARKER;
use crate::core::error::DomResult;
use crate::core::surface::{ClassTarget, MarkerPatch};

const COLLAPSED_PATCH: MarkerPatch = MarkerPatch {
    add: &[COLLAPSED_MARKER],
    remove: &[],
};

const EXPANDED_PATCH: MarkerPatch = MarkerPatch {
    add: &[],
    remove: &[COLLAPSED_MARKER],
};

/// Layout state shared by the sidebar and main-content regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SidebarState {
    /// Sidebar shown at full width.
    #[default]
    Expanded,
    /// Sidebar collapsed, main content widened.
    Collapsed,
}

impl SidebarState {
    /// The complementary state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Whether the regions carry the collapsed marker.
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }

    /// Region marker for this state, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Expanded => None,
            Self::Collapsed => Some(COLLAPSED_MARKER),
        }
    }

    /// Marker changes that move a region into this state.
    #[must_use]
    pub const fn marker_patch(self) -> MarkerPatch {
        match self {
            Self::Expanded => EXPANDED_PATCH,
            Self::Collapsed => COLLAPSED_PATCH,
        }
    }
}

/// Apply `state` to both layout regions.
///
/// # Errors
/// Returns the first failed class-list update.
pub fn apply_sidebar<S, M>(sidebar: &S, main: &M, state: SidebarState) -> DomResult<()>
where
    S: ClassTarget + ?Sized,
    M: ClassTarget + ?Sized,
{
    let patch = state.marker_patch();
    patch.apply(sidebar)?;
    patch.apply(main)
}

/// Sidebar collapse machine. Starts expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarToggle {
    state: SidebarState,
}

impl SidebarToggle {
    /// Expanded toggle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SidebarState::Expanded,
        }
    }

    /// Flip the state and apply it to both regions.
    ///
    /// # Errors
    /// Returns an error when a region rejects a class-list update; the state
    /// has already been flipped.
    pub fn toggle_sidebar<S, M>(&mut self, sidebar: &S, main: &M) -> DomResult<SidebarState>
    where
        S: ClassTarget + ?Sized,
        M: ClassTarget + ?Sized,
    {
        self.state = self.state.toggled();
        apply_sidebar(sidebar, main, self.state)?;
        Ok(self.state)
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SidebarState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::MemoryClassList;

    #[test]
    fn starts_expanded() {
        assert_eq!(SidebarToggle::new().state(), SidebarState::Expanded);
        assert_eq!(SidebarState::default().marker(), None);
    }

    #[test]
    fn toggle_marks_both_regions() {
        let sidebar = MemoryClassList::new();
        let main = MemoryClassList::with_classes(&["content"]);
        let mut toggle = SidebarToggle::new();

        assert_eq!(
            toggle.toggle_sidebar(&sidebar, &main),
            Ok(SidebarState::Collapsed)
        );
        assert!(sidebar.has_class("collapsed"));
        assert!(main.has_class("collapsed"));
        assert!(main.has_class("content"));

        assert_eq!(
            toggle.toggle_sidebar(&sidebar, &main),
            Ok(SidebarState::Expanded)
        );
        assert!(!sidebar.has_class("collapsed"));
        assert!(!main.has_class("collapsed"));
        assert!(main.has_class("content"));
    }

    #[test]
    fn apply_resyncs_divergent_regions() {
        let sidebar = MemoryClassList::with_classes(&["collapsed"]);
        let main = MemoryClassList::new();
        apply_sidebar(&sidebar, &main, SidebarState::Collapsed).expect("memory lists never fail");
        assert_eq!(sidebar.classes(), main.classes());
    }
}
