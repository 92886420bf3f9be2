//! Step definitions for work order board scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
