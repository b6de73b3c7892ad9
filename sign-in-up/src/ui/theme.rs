//! # GUI Theme
//!
//! Accent colors layered over egui's default visuals.

use egui::Color32;

/// Colors used by the form widgets
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Headings and the primary button
    pub selected: Color32,
    /// Validation and submission errors
    pub error: Color32,
    /// Hints and secondary text
    pub dim: Color32,
    /// Success screen accent
    pub success: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Color32::from_rgb(66, 133, 244),
            error: Color32::from_rgb(220, 53, 69),
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(40, 167, 69),
        }
    }
}
