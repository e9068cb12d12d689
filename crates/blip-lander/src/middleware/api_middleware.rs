//! API Middleware
//!
//! Consumes `Request` actions and runs the matching action creator on the
//! tokio runtime. The creator reports back through the dispatcher; the UI
//! loop picks those actions up on its next tick.

use crate::action_creators::ActionContext;
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::domain_models::RequestGenerations;
use crate::middleware::Middleware;
use crate::state::AppState;
use blip_client::BlipApi;
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct ApiMiddleware {
    runtime: Handle,
    api: Arc<dyn BlipApi>,
    generations: RequestGenerations,
}

impl ApiMiddleware {
    pub fn new(runtime: Handle, api: Arc<dyn BlipApi>, generations: RequestGenerations) -> Self {
        Self {
            runtime,
            api,
            generations,
        }
    }
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Request(request) = action else {
            return true;
        };

        let context = ActionContext::new(
            Arc::clone(&self.api),
            dispatcher.clone(),
            self.generations.clone(),
            state.config.default_route.clone(),
        );
        // Reserve generations here so dispatch order, not task scheduling,
        // decides which request of a kind is newest
        let ticket = self.generations.ticket(request.is_chained());
        let request = request.clone();
        self.runtime.spawn(async move {
            context.run(request, ticket).await;
        });

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_creators::testing::MockApi;
    use crate::actions::{ApiRequest, WorkingAction};
    use crate::domain_models::OperationKind;
    use crate::store::Store;
    use std::time::Duration;

    async fn settle(store: &mut Store) {
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            store.process_pending();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_request_runs_and_lands_in_store() {
        let api = MockApi::authenticated();
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(ApiMiddleware::new(
            Handle::current(),
            Arc::new(api.clone()),
            RequestGenerations::new(),
        )));

        store.dispatch(Action::Request(ApiRequest::FetchPatients));
        settle(&mut store).await;

        assert_eq!(api.calls(), vec!["fetch_patients".to_string()]);
        let blip = &store.state().blip;
        assert_eq!(blip.member_patient_ids, vec!["31".to_string()]);
        assert!(!blip.working.in_progress(OperationKind::FetchingPatients));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_failed_patient_leaves_data_untouched() {
        let api = MockApi::authenticated().with_missing_patient("7");
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(ApiMiddleware::new(
            Handle::current(),
            Arc::new(api.clone()),
            RequestGenerations::new(),
        )));

        store.dispatch(Action::Request(ApiRequest::FetchPatientWithData(
            "7".to_string(),
        )));
        settle(&mut store).await;

        assert_eq!(api.calls(), vec!["fetch_patient 7".to_string()]);
        let state = store.state();
        assert!(state
            .blip
            .working
            .notification(OperationKind::FetchingPatient)
            .is_some());
        assert_eq!(state.blip.working.get(OperationKind::FetchingPatientData).generation, 0);
        assert!(state.root.notification.is_some());
    }

    #[test]
    fn test_generations_reserved_in_dispatch_order() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let generations = RequestGenerations::new();
        let mut mw = ApiMiddleware::new(
            runtime.handle().clone(),
            Arc::new(MockApi::authenticated()),
            generations.clone(),
        );
        let (tx, _rx) = std::sync::mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        mw.handle(
            &Action::Request(ApiRequest::FetchPatientWithData("11".to_string())),
            &state,
            &dispatcher,
        );
        mw.handle(
            &Action::Request(ApiRequest::FetchPatient("31".to_string())),
            &state,
            &dispatcher,
        );

        // Nothing has run yet, yet both requests already hold their numbers
        assert_eq!(generations.next(), 4);
    }

    #[test]
    fn test_other_actions_pass_through() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let mut mw = ApiMiddleware::new(
            runtime.handle().clone(),
            Arc::new(MockApi::default()),
            RequestGenerations::new(),
        );
        let (tx, _rx) = std::sync::mpsc::channel();
        let passes = mw.handle(
            &Action::Working(WorkingAction::Begin {
                kind: OperationKind::FetchingUser,
                generation: 1,
            }),
            &AppState::default(),
            &Dispatcher::new(tx),
        );
        assert!(passes);
    }
}
