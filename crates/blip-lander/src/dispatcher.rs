//! Dispatcher for middleware and action creator dispatch
//!
//! Middleware and the asynchronous action creators never touch the store
//! directly. They send actions through the Dispatcher, and the store drains
//! the channel, so dispatched actions re-enter the middleware chain from the
//! beginning.
//!
//! This enables patterns like:
//! - Navigate is turned into Transition by the route middleware
//! - Transition triggers Request actions handled by the API middleware
//! - An action creator running on the runtime reports Begin/Succeeded/Failed

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Cheap to clone; every clone feeds the same store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
