//! Workboard: field-service work order board.
//!
//! This crate tracks work orders across a fixed status board, collects
//! comments, schedules one appointment per order and projects the
//! appointments onto a calendar.
//!
//! # Architecture
//!
//! Workboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence, blobs and printing
//! - **Adapters**: Concrete implementations of ports (memory, `PostgreSQL`,
//!   filesystem, templates)
//!
//! # Modules
//!
//! - [`order`]: Order model, store, board and calendar projections
//! - [`workspace`]: Dialog workflow over the store (editor, view, calendar)
//! - [`http`]: JSON API over the store
//! - [`config`]: Environment configuration for the server
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod order;
pub mod telemetry;
pub mod workspace;
