//! Work order management.
//!
//! Orders are created from a customer request, moved across the status
//! board, annotated with comments and scheduled for a single appointment.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
