//! Global Tokio runtime
//!
//! egui drives the UI from the main thread without an async executor, while
//! submissions are spawned with `tokio::spawn`. The binary enters this runtime
//! for the lifetime of the window so those spawns find a reactor.
//!
//! ```no_run
//! use sign_in_up::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! // eframe::run_native(...)
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("sign-in-up-worker")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime for submissions")
});
