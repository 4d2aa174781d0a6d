//! Gradebook API Library
//!
//! Record-management service core: entity definitions, the persistence
//! gateway, and the HTTP handlers that tie them together.

pub mod api;
pub mod config;
pub mod error;
pub mod records;
pub mod store;
