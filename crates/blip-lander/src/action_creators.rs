//! Action creators
//!
//! Each creator calls the platform once (twice for the chained patient data
//! request) and reports through the dispatcher: `Begin` before the call,
//! then `Succeeded` with the payload or `Failed` with the error. Errors stop
//! here; nothing above this layer sees an `anyhow::Error`.

use crate::actions::{Action, ApiRequest, Payload, WorkingAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{ApiFailure, OperationKind, RequestGenerations, RequestTicket};
use blip_client::BlipApi;
use std::future::Future;
use std::sync::Arc;

/// Everything an action creator needs, cheap to clone into a task
#[derive(Clone)]
pub struct ActionContext {
    pub api: Arc<dyn BlipApi>,
    pub dispatcher: Dispatcher,
    pub generations: RequestGenerations,
    /// Where a successful login lands
    pub post_login_route: String,
}

impl ActionContext {
    pub fn new(
        api: Arc<dyn BlipApi>,
        dispatcher: Dispatcher,
        generations: RequestGenerations,
        post_login_route: impl Into<String>,
    ) -> Self {
        Self {
            api,
            dispatcher,
            generations,
            post_login_route: post_login_route.into(),
        }
    }

    /// Run one request lifecycle; returns whether the call succeeded
    async fn perform<T, F, P>(
        &self,
        kind: OperationKind,
        generation: u64,
        call: F,
        into_payload: P,
    ) -> bool
    where
        F: Future<Output = anyhow::Result<T>>,
        P: FnOnce(T) -> Payload,
    {
        self.dispatcher
            .dispatch(Action::Working(WorkingAction::Begin { kind, generation }));

        match call.await {
            Ok(value) => {
                self.dispatcher
                    .dispatch(Action::Working(WorkingAction::Succeeded {
                        generation,
                        payload: into_payload(value),
                    }));
                true
            }
            Err(err) => {
                log::error!("{} failed: {:#}", kind, err);
                self.dispatcher.dispatch(Action::Working(WorkingAction::Failed {
                    kind,
                    generation,
                    error: ApiFailure::from(err),
                }));
                false
            }
        }
    }

    /// Execute a request to completion under generations reserved at dispatch
    pub async fn run(&self, request: ApiRequest, ticket: RequestTicket) {
        let api = self.api.as_ref();
        let generation = ticket.primary;

        match request {
            ApiRequest::Login(credentials) => {
                if self
                    .perform(
                        OperationKind::LoggingIn,
                        generation,
                        api.login(&credentials),
                        Payload::LoggedIn,
                    )
                    .await
                {
                    self.dispatcher
                        .dispatch(Action::navigate(self.post_login_route.clone()));
                }
            }
            ApiRequest::Logout => {
                // Local data is cleared either way, so always leave for home
                self.perform(OperationKind::LoggingOut, generation, api.logout(), |_| {
                    Payload::LoggedOut
                })
                .await;
                self.dispatcher.dispatch(Action::navigate("/"));
            }
            ApiRequest::FetchUser => {
                self.perform(
                    OperationKind::FetchingUser,
                    generation,
                    api.fetch_user(),
                    Payload::User,
                )
                .await;
            }
            ApiRequest::FetchPatient(patient_id) => {
                self.perform(
                    OperationKind::FetchingPatient,
                    generation,
                    api.fetch_patient(&patient_id),
                    Payload::Patient,
                )
                .await;
            }
            ApiRequest::FetchPatientWithData(patient_id) => {
                let found = self
                    .perform(
                        OperationKind::FetchingPatient,
                        generation,
                        api.fetch_patient(&patient_id),
                        Payload::Patient,
                    )
                    .await;
                if !found {
                    log::debug!("Skipping data fetch, patient {} not loaded", patient_id);
                    return;
                }
                let data_generation = ticket.chained.unwrap_or_else(|| self.generations.next());
                self.perform(
                    OperationKind::FetchingPatientData,
                    data_generation,
                    api.fetch_patient_data(&patient_id),
                    Payload::PatientData,
                )
                .await;
            }
            ApiRequest::FetchPatients => {
                self.perform(
                    OperationKind::FetchingPatients,
                    generation,
                    api.fetch_patients(),
                    Payload::Patients,
                )
                .await;
            }
            ApiRequest::FetchPendingSentInvites => {
                self.perform(
                    OperationKind::FetchingPendingSentInvites,
                    generation,
                    api.fetch_pending_sent_invites(),
                    Payload::PendingSentInvites,
                )
                .await;
            }
            ApiRequest::FetchPendingReceivedInvites => {
                self.perform(
                    OperationKind::FetchingPendingReceivedInvites,
                    generation,
                    api.fetch_pending_received_invites(),
                    Payload::PendingReceivedInvites,
                )
                .await;
            }
            ApiRequest::UpdatePatient(patient) => {
                self.perform(
                    OperationKind::UpdatingPatient,
                    generation,
                    api.update_patient(&patient),
                    Payload::PatientUpdated,
                )
                .await;
            }
            ApiRequest::SetMemberPermissions {
                patient_id,
                member_id,
                permissions,
            } => {
                let call = api.set_member_permissions(&patient_id, &member_id, &permissions);
                self.perform(OperationKind::SettingMemberPermissions, generation, call, |_| {
                    Payload::MemberPermissionsSet {
                        patient_id: patient_id.clone(),
                        member_id: member_id.clone(),
                        permissions,
                    }
                })
                .await;
            }
            ApiRequest::RemoveMember {
                patient_id,
                member_id,
            } => {
                let call = api.remove_member(&patient_id, &member_id);
                self.perform(OperationKind::RemovingMember, generation, call, |_| {
                    Payload::MemberRemoved {
                        patient_id: patient_id.clone(),
                        member_id: member_id.clone(),
                    }
                })
                .await;
            }
            ApiRequest::SendInvite { email, permissions } => {
                self.perform(
                    OperationKind::SendingInvite,
                    generation,
                    api.send_invite(&email, &permissions),
                    Payload::InviteSent,
                )
                .await;
            }
            ApiRequest::CancelSentInvite { email } => {
                let call = api.cancel_sent_invite(&email);
                self.perform(OperationKind::CancellingSentInvite, generation, call, |_| {
                    Payload::SentInviteCancelled {
                        email: email.clone(),
                    }
                })
                .await;
            }
            ApiRequest::AcceptTerms => {
                let accepted_at = chrono::Utc::now().to_rfc3339();
                let call = api.accept_terms(&accepted_at);
                self.perform(OperationKind::AcceptingTerms, generation, call, |_| {
                    Payload::TermsAccepted {
                        accepted_at: accepted_at.clone(),
                    }
                })
                .await;
            }
            ApiRequest::ConfirmSignup(signup_key) => {
                self.perform(
                    OperationKind::ConfirmingSignup,
                    generation,
                    api.confirm_signup(&signup_key),
                    |_| Payload::SignupConfirmed,
                )
                .await;
            }
        }
    }
}
