//! # Sign-in / Sign-up Screen
//!
//! Mode switch plus the login or registration fields, using egui widgets.
//!
//! Widgets edit local copies taken from the frame's state snapshot; edits are
//! written back field by field under a short write lock. Mode switches and
//! submits are collected while drawing and applied once drawing is done, so no
//! state guard is alive when the mode subscriber runs.

use chrono::Local;
use egui;

use crate::app::{App, AppState};
use crate::forms::registration::{
    birth_date_error, format_birth_date, normalize_phone, parse_birth_date,
};
use crate::forms::{Control, FormControl, FormMode, LoginForm, RegistrationForm};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::ViewState;

/// Picks one text control out of the shared state
type TextField = fn(&mut AppState) -> &mut FormControl<String>;

enum Intent {
    SwitchMode(FormMode),
    Submit,
}

/// Render the sign-in / sign-up form for the current mode
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, view: &mut ViewState) {
    let theme = Theme::default();
    let mode = app.mode();
    let mut intent = None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(FIELD_WIDTH);
        ui.add_space(24.0);

        forms::render_form_heading(ui, mode.title(), &theme);
        if let Some(next) = forms::render_mode_toggle(ui, mode) {
            intent = Some(Intent::SwitchMode(next));
        }
        ui.add_space(12.0);

        let enter_pressed = match mode {
            FormMode::Login => render_login_fields(ui, &state.forms.login, app, view, &theme),
            FormMode::Registration => {
                render_registration_fields(ui, &state.forms.registration, app, view, &theme)
            }
        };

        ui.add_space(12.0);

        if let Some(err) = &state.submit_error {
            forms::render_error(ui, err, &theme);
        }

        let clicked = forms::render_button(ui, mode.submit_label(), Some(theme.selected)).clicked();
        if (clicked || enter_pressed) && intent.is_none() {
            intent = Some(Intent::Submit);
        }

        ui.add_space(8.0);
        if state.is_submitting() {
            ui.horizontal(|ui| {
                ui.spinner();
                forms::render_hint(ui, "Sending...", &theme);
            });
        } else {
            forms::render_hint(ui, "Press <Enter> to submit", &theme);
        }
    });

    match intent {
        Some(Intent::SwitchMode(next)) => {
            app.handle_mode_change(next);
            view.reset();
        }
        Some(Intent::Submit) => {
            app.handle_submit();
        }
        None => {}
    }
}

/// Render login fields. Returns true when Enter was pressed in the password field.
fn render_login_fields(
    ui: &mut egui::Ui,
    form: &LoginForm,
    app: &App,
    view: &mut ViewState,
    theme: &Theme,
) -> bool {
    render_email_field(ui, &form.email, |s| &mut s.forms.login.email, app, theme);

    let password = text_field(
        ui,
        app,
        &form.password,
        |s| &mut s.forms.login.password,
        ("Password", "At least 8 characters"),
        !view.show_password,
        theme,
    );
    ui.checkbox(&mut view.show_password, "Show password");

    password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Render registration fields. Returns true when Enter was pressed in the password field.
fn render_registration_fields(
    ui: &mut egui::Ui,
    form: &RegistrationForm,
    app: &App,
    view: &mut ViewState,
    theme: &Theme,
) -> bool {
    text_field(ui, app, &form.name, |s| &mut s.forms.registration.name, ("Name", "Ivan"), false, theme);
    text_field(
        ui,
        app,
        &form.surname,
        |s| &mut s.forms.registration.surname,
        ("Surname", "Petrov"),
        false,
        theme,
    );
    render_birth_date_field(ui, form, app, view, theme);
    render_phone_field(ui, &form.phone_number, app, theme);
    render_email_field(ui, &form.email, |s| &mut s.forms.registration.email, app, theme);

    let password = text_field(
        ui,
        app,
        &form.password,
        |s| &mut s.forms.registration.password,
        ("Password", "At least 8 characters"),
        !view.show_password,
        theme,
    );
    ui.checkbox(&mut view.show_password, "Show password");

    password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Text input bound to one control: edits set the value, losing focus touches it.
fn text_field(
    ui: &mut egui::Ui,
    app: &App,
    control: &FormControl<String>,
    field: TextField,
    (label, hint): (&str, &str),
    password: bool,
    theme: &Theme,
) -> egui::Response {
    let mut value = control.value().cloned().unwrap_or_default();
    let response =
        forms::render_text_input(ui, label, control.is_required(), &mut value, hint, password);
    sync_text(app, &response, value, field);
    forms::render_field_error(ui, control.visible_error(), theme);
    ui.add_space(8.0);
    response
}

fn sync_text(app: &App, response: &egui::Response, value: String, field: TextField) {
    if !response.changed() && !response.lost_focus() {
        return;
    }
    let mut state = app.state.write();
    let control = field(&mut *state);
    if response.changed() {
        control.set_value(Some(value));
    }
    if response.lost_focus() {
        control.mark_as_touched();
    }
}

fn render_email_field(
    ui: &mut egui::Ui,
    control: &FormControl<String>,
    field: TextField,
    app: &App,
    theme: &Theme,
) {
    let mut value = control.value().cloned().unwrap_or_default();
    let response = forms::render_text_input(ui, "Email", true, &mut value, "you@example.com", false);

    let suggestions = app.email_suggestions(&value);
    sync_text(app, &response, value, field);

    if let Some(chosen) = forms::render_email_suggestions(ui, &suggestions, theme) {
        tracing::debug!("Email suggestion accepted");
        field(&mut *app.state.write()).set_value(Some(chosen));
    }

    forms::render_field_error(ui, control.visible_error(), theme);
    ui.add_space(8.0);
}

fn render_phone_field(ui: &mut egui::Ui, control: &FormControl<String>, app: &App, theme: &Theme) {
    let mut value = control.value().cloned().unwrap_or_default();
    let response = forms::render_text_input(ui, "Phone", false, &mut value, "+79991234567", false);
    let value = normalize_phone(&value);
    sync_text(app, &response, value, |s| &mut s.forms.registration.phone_number);
    forms::render_field_error(ui, control.visible_error(), theme);
    ui.add_space(8.0);
}

/// Birth date: typed as dd.mm.yyyy or picked from the calendar.
fn render_birth_date_field(
    ui: &mut egui::Ui,
    form: &RegistrationForm,
    app: &App,
    view: &mut ViewState,
    theme: &Theme,
) {
    let control = &form.birth_date;
    if !control.is_dirty() {
        view.birth_date_text = control.value().map(|d| format_birth_date(*d)).unwrap_or_default();
    }

    forms::render_label(ui, "Birth date", control.is_required());
    let calendar_start = control
        .value()
        .copied()
        .or(form.max_birth_date())
        .unwrap_or_else(|| Local::now().date_naive());

    let (text, picked) = ui
        .horizontal(|ui| {
            let text = ui.add_sized(
                [FIELD_WIDTH - 120.0, 28.0],
                egui::TextEdit::singleline(&mut view.birth_date_text).hint_text("dd.mm.yyyy"),
            );
            let picked = forms::render_date_picker(ui, "birth_date", calendar_start);
            (text, picked)
        })
        .inner;

    if picked.is_some() || text.changed() || text.lost_focus() {
        let mut state = app.state.write();
        let control = &mut state.forms.registration.birth_date;
        if let Some(date) = picked {
            control.set_value(Some(date));
            control.mark_as_touched();
            view.birth_date_text = format_birth_date(date);
        } else if text.changed() {
            control.set_value(parse_birth_date(&view.birth_date_text));
            control.mark_as_dirty();
        }
        if text.lost_focus() {
            control.mark_as_touched();
        }
    }

    let error = birth_date_error(control, &view.birth_date_text);
    forms::render_field_error(ui, error.as_ref(), theme);
    ui.add_space(8.0);
}
