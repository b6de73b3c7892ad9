//! Reusable UI components

pub mod forms;
