//! Shared style tokens for playground controls.

/// Color intent for buttons and accents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Primary,
    Secondary,
}

impl Tone {
    /// Class suffix (e.g. `"primary"`).
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Surface treatment for button-like controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Variant {
    #[default]
    Contained,
    Outlined,
    Text,
}

impl Variant {
    pub(crate) const fn as_class(self) -> &'static str {
        match self {
            Self::Contained => "btn-contained",
            Self::Outlined => "btn-outlined",
            Self::Text => "btn-text",
        }
    }
}

/// Prefix a tone with a component class (e.g. `btn-primary`).
pub(crate) fn tone_class(prefix: &str, tone: Option<Tone>) -> Option<String> {
    tone.map(|tone| format!("{prefix}-{}", tone.as_str()))
}
