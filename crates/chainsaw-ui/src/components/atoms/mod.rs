//! Shared UI atoms used across the shell and pages.

pub(crate) mod button;
pub(crate) mod paper;
pub(crate) mod switch;

pub(crate) use button::Button;
pub(crate) use paper::Paper;
pub(crate) use switch::Switch;
