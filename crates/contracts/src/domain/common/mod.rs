//! Common types and traits for all aggregates

pub mod aggregate_root;

pub use aggregate_root::AggregateRoot;
