//! Data transfer objects
//!
//! Partial-update types exchanged between the pipeline editor and the
//! caller-owned record list.

pub mod pipeline;
