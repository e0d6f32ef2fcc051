//! Dependency classification: the domain model and the pure services that
//! walk a resolved catalog, classify transitive dependencies and filter
//! the result. Nothing in here performs I/O.

pub mod domain;
pub mod services;
