use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// The store is the only writer of `AppState`. Everything else dispatches.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer, then drain
    /// everything dispatched meanwhile
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        self.process_pending();
    }

    /// Drain actions dispatched by middleware or background tasks
    ///
    /// Returns the number of actions processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.pending.try_recv() {
            self.apply(action);
            processed += 1;
        }
        processed
    }

    fn apply(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            let previous = self.state.config.debug.then(|| self.state.clone());
            self.state = reduce(std::mem::take(&mut self.state), &action);

            if let Some(previous) = previous {
                let changed = self.state.changed_slices(&previous);
                if !changed.is_empty() {
                    log::debug!("State changed: {}", changed.join(", "));
                    log::trace!("New state: {:?}", self.state);
                }
            }
        }
    }
}
