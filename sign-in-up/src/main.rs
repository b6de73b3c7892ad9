use sign_in_up::debug::{self, config::AppConfig};
use sign_in_up::ui::SignInUpWindow;
use sign_in_up::utils::runtime::TOKIO_RT;
use sign_in_up::App;

const APP_ID: &str = "sign-in-up";

fn main() -> eframe::Result {
    let config = AppConfig::from_env();
    debug::logger::init(&config);

    // Submissions are spawned from the UI thread
    let _runtime = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sign in / Sign up")
            .with_app_id(APP_ID)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        "Opening window"
    );

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |_cc| Ok(Box::new(SignInUpWindow::new(App::new(&config))))),
    )
}
