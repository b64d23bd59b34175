//! datarange - interval arithmetic and tabular aggregation for chart data
//!
//! This crate provides two small, side-effect-free numeric utilities used to
//! prepare and summarize tabular data for presentation:
//! - An immutable closed interval type ([`Range`]) with arithmetic
//!   operations: expansion, combination, intersection, shifting, scaling
//! - Aggregation and conversion functions ([`stats`]) over abstract tabular
//!   and keyed data sources, with missing-value (skip, don't zero) semantics
//!   and exact NaN/Infinity propagation rules
//!
//! Every operation is a pure, synchronous computation over its own arguments;
//! there is no shared state, so all functions are freely callable from
//! multiple threads.

pub mod range;
pub mod stats;
pub mod values;

// Re-export commonly used types
pub use range::{Range, RangeError};
pub use values::{KeyedList, KeyedSource, TableSource};
