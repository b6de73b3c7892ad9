//! # Navigation Handlers

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Switch the visible screen
///
/// Internal handler function - reached through [`crate::services::StateRouter`].
pub(crate) fn handle_screen_change(state: &Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::info!(from = state.current_screen.path(), to = screen.path(), "Navigating");
    }
    state.current_screen = screen;
}
