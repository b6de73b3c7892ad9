//! # Mode Controller
//!
//! Holds the login/registration switch and notifies subscribers whenever it
//! changes. A subscription is released through its [`Subscription`] handle,
//! either explicitly or when the handle is dropped.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Which form the screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMode {
    /// Sign in with email and password
    #[default]
    Login,
    /// Create a new account
    Registration,
}

impl FormMode {
    /// Modes in segmented-switch order
    pub fn all() -> &'static [FormMode] {
        &[FormMode::Login, FormMode::Registration]
    }

    /// Label for the segmented switch
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Login => "Sign in",
            FormMode::Registration => "Sign up",
        }
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Login => "Sign in",
            FormMode::Registration => "Create account",
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Login => write!(f, "login"),
            FormMode::Registration => write!(f, "registration"),
        }
    }
}

type Listener = Box<dyn FnMut(FormMode) + Send>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// The mode switch with change notifications.
///
/// Listeners run synchronously inside [`ModeControl::set_value`]. They must not
/// subscribe or unsubscribe from within the notification.
pub struct ModeControl {
    value: FormMode,
    listeners: Arc<Mutex<Listeners>>,
}

impl ModeControl {
    pub fn new(initial: FormMode) -> Self {
        Self {
            value: initial,
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    pub fn value(&self) -> FormMode {
        self.value
    }

    /// Switch the mode, notifying every subscriber.
    ///
    /// Returns `false` (and notifies nobody) when `mode` is already active.
    pub fn set_value(&mut self, mode: FormMode) -> bool {
        if self.value == mode {
            return false;
        }
        self.value = mode;

        let mut listeners = self.listeners.lock();
        for (_, listener) in listeners.entries.iter_mut() {
            listener(mode);
        }
        true
    }

    /// Register a listener called with the new mode on every change.
    #[must_use = "dropping the Subscription cancels it immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(FormMode) + Send + 'static,
    {
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
            active: true,
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }
}

impl Default for ModeControl {
    fn default() -> Self {
        Self::new(FormMode::default())
    }
}

impl fmt::Debug for ModeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeControl")
            .field("value", &self.value)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle to a mode-change listener.
///
/// The listener is removed exactly once: by [`Subscription::unsubscribe`] or,
/// failing that, when the handle is dropped (including during unwinding).
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
    active: bool,
}

impl Subscription {
    /// Cancel the subscription now.
    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        // Controller already gone: nothing left to remove.
        if let Some(listeners) = self.listeners.upgrade() {
            let id = self.id;
            listeners.lock().entries.retain(|(entry_id, _)| *entry_id != id);
            tracing::debug!(subscription = id, "Mode subscription cancelled");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
