//! Derived tables and summary metrics for bike share rental data.
//!
//! This crate handles transforming normalized rental records into the
//! grouped tables and headline metrics consumed by chart front-ends.

pub mod aggregate;
pub mod dashboard;
pub mod metrics;
