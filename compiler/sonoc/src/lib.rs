//! Sono compiler driver library.
//!
//! The binary in `main.rs` is a thin dispatcher; the actual command
//! handlers and the front-end pipeline live here so tests can drive them
//! directly.

pub mod commands;
pub mod pipeline;
