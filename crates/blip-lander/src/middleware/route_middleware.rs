//! Route Middleware
//!
//! The root view controller. Turns `Navigate` requests into route
//! transitions and, on every transition (the first mount included):
//! - refreshes the logged-in user when authenticated
//! - starts the fetch sequence of the matched route
//! - reports one metric event for the route category

use crate::actions::{Action, ApiRequest, GlobalAction, RouteAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Location, Route};
use crate::metrics::MetricsSink;
use crate::middleware::Middleware;
use crate::state::AppState;
use blip_client::BlipApi;
use std::sync::Arc;

pub struct RouteMiddleware {
    api: Arc<dyn BlipApi>,
    metrics: Arc<dyn MetricsSink>,
}

impl RouteMiddleware {
    pub fn new(api: Arc<dyn BlipApi>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self { api, metrics }
    }

    fn navigate(&self, path: &str, state: &AppState, dispatcher: &Dispatcher) {
        let location = match Location::parse(path) {
            Ok(location) => location,
            Err(e) => {
                log::warn!("Cannot navigate to {:?}: {}", path, e);
                return;
            }
        };

        let route = location.route();
        let authenticated = self.api.is_authenticated();
        if let Some(target) = redirect_for(&route, authenticated, &state.config.default_route) {
            log::debug!("Redirecting {} to {}", location.path, target);
            dispatcher.dispatch(Action::navigate(target));
            return;
        }

        dispatcher.dispatch(Action::Route(RouteAction::Transition(location)));
    }

    fn on_transition(&self, location: &Location, dispatcher: &Dispatcher) {
        let route = location.route();
        log::info!("Transition to {} ({:?})", location.path, route);

        // The account is refreshed on every transition
        if self.api.is_authenticated() {
            dispatcher.dispatch(Action::Request(ApiRequest::FetchUser));
        }

        let signup_key = location
            .query
            .get("signupKey")
            .map(String::as_str)
            .filter(|key| !key.is_empty());
        for request in fetch_plan(&route, signup_key) {
            dispatcher.dispatch(Action::Request(request));
        }

        self.metrics.track_metric(route.metric_name());
    }
}

/// Requests started when entering `route`
///
/// At most one sequence per transition; pages that render from what is
/// already loaded get an empty plan.
pub fn fetch_plan(route: &Route, signup_key: Option<&str>) -> Vec<ApiRequest> {
    match route {
        Route::Login => signup_key
            .map(|key| vec![ApiRequest::ConfirmSignup(key.to_string())])
            .unwrap_or_default(),
        Route::PatientsList => vec![
            ApiRequest::FetchPendingReceivedInvites,
            ApiRequest::FetchPatients,
        ],
        Route::PatientProfile(id) => vec![ApiRequest::FetchPatient(id.clone())],
        Route::PatientData(id) => vec![ApiRequest::FetchPatientWithData(id.clone())],
        Route::PatientShare(id) => vec![
            ApiRequest::FetchPatient(id.clone()),
            ApiRequest::FetchPendingSentInvites,
        ],
        Route::PatientNew
        | Route::Profile
        | Route::Signup
        | Route::EmailVerification
        | Route::RequestPasswordReset
        | Route::ConfirmPasswordReset
        | Route::Unmatched => vec![],
    }
}

/// Where to send the user instead of `route`, if anywhere
fn redirect_for(route: &Route, authenticated: bool, default_route: &str) -> Option<String> {
    let requires_auth = matches!(
        route,
        Route::Profile
            | Route::PatientsList
            | Route::PatientNew
            | Route::PatientProfile(_)
            | Route::PatientShare(_)
            | Route::PatientData(_)
    );
    let requires_no_auth = matches!(route, Route::Login | Route::Signup);

    if requires_auth && !authenticated {
        Some("/login".to_string())
    } else if requires_no_auth && authenticated {
        Some(default_route.to_string())
    } else {
        None
    }
}

impl Middleware for RouteMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Route(RouteAction::Navigate(path)) => {
                self.navigate(path, state, dispatcher);
                false
            }
            Action::Route(RouteAction::Transition(location)) => {
                self.on_transition(location, dispatcher);
                true
            }
            Action::Global(GlobalAction::TrackMetric(event)) => {
                self.metrics.track_metric(event);
                false
            }
            _ => true,
        }
    }
}
