//! Minimal task-tracking CLI, layered as repository, service, and dispatcher.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
