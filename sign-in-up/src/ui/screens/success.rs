//! Success destination shown after a login or registration went through.

use egui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let mut back = false;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(
            egui::RichText::new(Screen::Success.title())
                .heading()
                .strong()
                .color(theme.success),
        );
        ui.add_space(12.0);

        if let Some(response) = &state.last_response {
            let who = response.user.name.as_deref().unwrap_or(&response.user.email);
            ui.label(format!("Signed in as {}", who));
            forms::render_hint(ui, &response.message, &theme);
        }

        ui.add_space(24.0);
        back = forms::render_button(ui, "Back to sign in", None).clicked();
    });

    if back {
        app.handle_screen_change(Screen::SignInUp);
    }
}
