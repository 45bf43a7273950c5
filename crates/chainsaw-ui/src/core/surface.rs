//! Marker-class surfaces that state projections are applied to.
//!
//! # Design
//! - Projections are pure (`state -> markers`); applying them is the only side
//!   effect and goes through [`ClassTarget`].
//! - The browser implements the trait on `web_sys::Element`; tests use
//!   [`MemoryClassList`].

use crate::core::error::DomResult;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Something that carries a set of marker classes.
///
/// Methods take `&self` because DOM class lists mutate through shared handles.
pub trait ClassTarget {
    /// Add `class` if it is not already present.
    ///
    /// # Errors
    /// Returns an error when the host rejects the mutation.
    fn add_class(&self, class: &'static str) -> DomResult<()>;

    /// Remove `class` if it is present.
    ///
    /// # Errors
    /// Returns an error when the host rejects the mutation.
    fn remove_class(&self, class: &'static str) -> DomResult<()>;

    /// Whether `class` is currently present.
    fn has_class(&self, class: &str) -> bool;
}

/// Marker changes that move a surface into a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerPatch {
    /// Markers that must be present afterwards.
    pub add: &'static [&'static str],
    /// Markers that must be absent afterwards.
    pub remove: &'static [&'static str],
}

impl MarkerPatch {
    /// Apply the patch to one surface, removing before adding.
    ///
    /// # Errors
    /// Returns the first failed class-list mutation.
    pub fn apply<T: ClassTarget + ?Sized>(&self, target: &T) -> DomResult<()> {
        for class in self.remove {
            target.remove_class(class)?;
        }
        for class in self.add {
            target.add_class(class)?;
        }
        Ok(())
    }

    /// Whether `target` already reflects the patch.
    #[must_use]
    pub fn is_applied<T: ClassTarget + ?Sized>(&self, target: &T) -> bool {
        self.add.iter().all(|class| target.has_class(class))
            && self.remove.iter().all(|class| !target.has_class(class))
    }
}

/// In-memory class list used by tests and headless callers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClassList {
    classes: RefCell<BTreeSet<String>>,
}

impl MemoryClassList {
    /// Empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class list seeded with `classes`.
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(ToString::to_string).collect()),
        }
    }

    /// Snapshot of the current classes in sorted order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassTarget for MemoryClassList {
    fn add_class(&self, class: &'static str) -> DomResult<()> {
        self.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &'static str) -> DomResult<()> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}
