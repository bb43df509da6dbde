//! Logloom Core
//!
//! Shared types for the logloom log-pipeline configuration system.
//!
//! This crate contains:
//! - Domain types: Core business entities (PipelineRecord, ProcessorStep,
//!   alert-rule label maps)
//! - DTOs: Partial-update types exchanged between the editor and the
//!   record list it operates on

pub mod domain;
pub mod dto;
