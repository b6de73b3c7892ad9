//! Utility helpers

pub mod runtime;
