//! # Form Components
//!
//! Reusable form elements for the sign-in / sign-up screen

use chrono::NaiveDate;
use egui;

use crate::forms::{FormMode, ValidationError};
use crate::ui::theme::Theme;

/// Width shared by every input on the form
pub const FIELD_WIDTH: f32 = 280.0;
const FIELD_SIZE: [f32; 2] = [FIELD_WIDTH, 28.0];

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    required: bool,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    render_label(ui, label, required);
    ui.add_sized(
        FIELD_SIZE,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Render a label, with an asterisk for required fields
pub fn render_label(ui: &mut egui::Ui, label: &str, required: bool) {
    if required {
        ui.label(format!("{} *", label));
    } else {
        ui.label(label);
    }
}

/// Render a date input: typed text plus a calendar picker.
///
/// Returns the picked date when the calendar changed it.
pub fn render_date_picker(
    ui: &mut egui::Ui,
    id_salt: &str,
    date: NaiveDate,
) -> Option<NaiveDate> {
    let mut picked = date;
    let response = ui.add(
        egui_extras::DatePickerButton::new(&mut picked)
            .id_salt(id_salt)
            .calendar_week(false)
            .show_icon(true)
            .format("%d.%m.%Y"),
    );
    (response.changed() && picked != date).then_some(picked)
}

/// Render the first visible error of a field, or nothing
pub fn render_field_error(ui: &mut egui::Ui, error: Option<&ValidationError>, theme: &Theme) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error.to_string()).small().color(theme.error));
    }
}

/// Render clickable email completions. Returns the chosen one.
pub fn render_email_suggestions(
    ui: &mut egui::Ui,
    suggestions: &[String],
    theme: &Theme,
) -> Option<String> {
    let mut chosen = None;
    ui.horizontal_wrapped(|ui| {
        ui.set_max_width(FIELD_WIDTH);
        for suggestion in suggestions {
            let text = egui::RichText::new(suggestion).small().color(theme.dim);
            if ui.selectable_label(false, text).clicked() {
                chosen = Some(suggestion.clone());
            }
        }
    });
    chosen
}

/// Render the login / registration switch. Returns the newly selected mode.
pub fn render_mode_toggle(ui: &mut egui::Ui, current: FormMode) -> Option<FormMode> {
    let mut selected = None;
    ui.horizontal(|ui| {
        for &mode in FormMode::all() {
            if ui.selectable_label(current == mode, mode.title()).clicked() && current != mode {
                selected = Some(mode);
            }
        }
    });
    selected
}

/// Render a styled button
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    fill_color: Option<egui::Color32>,
) -> egui::Response {
    let mut button = egui::Button::new(egui::RichText::new(text).strong())
        .min_size(egui::vec2(FIELD_WIDTH, 32.0));

    if let Some(color) = fill_color {
        button = button.fill(color);
    }

    ui.add(button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .heading()
        .strong()
        .color(theme.selected);
    ui.label(heading);
    ui.add_space(12.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(6.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).small().color(theme.dim));
}
