//! Core domain types
//!
//! This module contains the domain structures shared across logloom
//! components. These types represent the fundamental configuration
//! entities the editor reads and writes.

pub mod alert;
pub mod pipeline;
