//! Logging initialization

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::AppConfig;

const LOG_FILE_PREFIX: &str = "sign-in-up.log";

/// Initialize the logging system
///
/// Sets up:
/// - Console output on stderr
/// - Daily rotated log file in `config.log_dir`, written through a non-blocking worker
/// - Panic hook that records panics before the default handler runs
///
/// If the log directory cannot be created, only the console layer is installed.
pub fn init(config: &AppConfig) {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("sign_in_up=info,warn"));

    // Source locations on the console only when debugging
    let verbose = config.is_debug_enabled();
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(verbose)
        .with_line_number(verbose);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        subscriber.init();
    } else {
        let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        subscriber.with(file_layer).init();

        // Flushes on drop; must outlive every log call
        std::mem::forget(guard);
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        email_domains = config.email_domains.len(),
        "Logging initialized"
    );

    setup_panic_hook();
}

/// Log panics with their location, then hand over to the default hook.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            backtrace = %std::backtrace::Backtrace::capture(),
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
