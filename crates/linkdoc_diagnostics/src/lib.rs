//! Validation findings, severity management, and rendering.
//!
//! This crate provides structured [`Finding`]s with severity levels, stable
//! diagnostic codes, and optional help text. The [`FindingSink`] accumulates
//! findings while rules run, and [`FindingRenderer`] implementations format
//! them for the terminal.

#![warn(missing_docs)]

pub mod code;
pub mod finding;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use finding::Finding;
pub use renderer::{FindingRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::FindingSink;
