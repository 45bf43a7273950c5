//! Error types for DOM glue operations.

use thiserror::Error;

/// Failures raised while binding or updating page chrome.
///
/// None of these abort the page: callers log them and keep the rest of the UI
/// usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The global window or document was unavailable.
    #[error("document unavailable")]
    NoDocument,
    /// A contract element was not present in the markup.
    #[error("element not found")]
    MissingElement {
        /// Element id that was looked up.
        id: &'static str,
    },
    /// Adding or removing a marker class failed.
    #[error("class list update failed")]
    ClassList {
        /// Marker class being applied.
        class: &'static str,
        /// Detail reported by the host.
        detail: String,
    },
    /// The ambient media query could not be evaluated.
    #[error("media query unavailable")]
    MediaQuery {
        /// Query that was evaluated.
        query: &'static str,
    },
}

/// Result alias for DOM glue operations.
pub type DomResult<T> = Result<T, DomError>;

impl DomError {
    /// Element id tied to the failure, when there is one.
    #[must_use]
    pub const fn element_id(&self) -> Option<&'static str> {
        match self {
            Self::MissingElement { id } => Some(id),
            Self::NoDocument | Self::ClassList { .. } | Self::MediaQuery { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_exposes_id() {
        let err = DomError::MissingElement { id: "collapse-btn" };
        assert_eq!(err.element_id(), Some("collapse-btn"));
        assert_eq!(err.to_string(), "element not found");
    }

    #[test]
    fn other_variants_have_no_element_id() {
        assert_eq!(DomError::NoDocument.element_id(), None);
        let err = DomError::ClassList {
            class: "collapsed",
            detail: "SyntaxError".to_string(),
        };
        assert_eq!(err.element_id(), None);
        assert_eq!(err.to_string(), "class list update failed");
    }
}
