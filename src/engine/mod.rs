//! Change execution engine.
//!
//! Runs the validate / read / change / verify sequence and describes how
//! it ended.

pub mod orchestrator;
pub mod result;
