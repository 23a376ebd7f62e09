//! Presentation layer
//!
//! Command-line parsing and output rendering.

pub mod cli;
