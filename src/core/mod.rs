//! Core processing building blocks: dimension geometry, resampling, border
//! synthesis, fit strategies, and the batch loop. These are internal
//! primitives consumed by the high-level `api` module.
pub mod batch;
pub mod border;
pub mod geometry;
pub mod params;
pub mod pixel;
pub mod resize;
pub mod strategy;
