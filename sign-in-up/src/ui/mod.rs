//! # GUI Rendering
//!
//! egui front end for [`App`]. [`SignInUpWindow`] is the `eframe` entry point;
//! every frame it drains collaborator results, snapshots the state and draws
//! the current screen from that snapshot.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use egui;

use crate::app::{App, Screen};

/// Widget state that is not part of the forms
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Password fields show plain text
    pub show_password: bool,
    /// Birth date as typed, kept while it does not parse yet
    pub birth_date_text: String,
}

impl ViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Native window hosting the component
pub struct SignInUpWindow {
    app: App,
    view: ViewState,
}

impl SignInUpWindow {
    pub fn new(app: App) -> Self {
        Self {
            app,
            view: ViewState::default(),
        }
    }
}

impl eframe::App for SignInUpWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        render(ctx, &mut self.app, &mut self.view);

        // Results arrive without user input; keep polling until they do
        if self.app.state.read().is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, view: &mut ViewState) {
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => {
            ctx.request_repaint();
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match state.current_screen {
            Screen::SignInUp => screens::sign_in_up::render(ui, &state, app, view),
            Screen::Success => {
                screens::success::render(ui, &state, app);
                view.reset();
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_reset() {
        let mut view = ViewState {
            show_password: true,
            birth_date_text: "12.04".to_string(),
        };
        view.reset();
        assert_eq!(view, ViewState::default());
    }
}
