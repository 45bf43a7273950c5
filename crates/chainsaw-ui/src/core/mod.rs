//! Core, DOM-free primitives and helpers for the playground.
pub mod ambient;
pub mod contract;
pub mod error;
pub mod level;
pub mod random;
pub mod routes;
pub mod sidebar;
pub mod store;
pub mod surface;
pub mod theme;
