//! Input records.
//!
//! Scoring engines only need to ask an example for the value of a feature by
//! name. [`Example`] captures that capability; any map, row or struct that can
//! answer the question qualifies.

mod example;

pub use example::{Example, Value, ValueRef};
