//! Shared helpers

pub mod format;

pub use format::{format_offset_decimal, format_offset_hex, human_readable_size};
