//! Routed page features.
pub mod experiment;
pub mod home;
pub mod randomizer;
