//! Core types for mindcheck.

pub mod inference;

pub use inference::*;
