//! Blip API client trait
//!
//! This module defines the core `BlipApi` trait that all client
//! implementations must satisfy. The application only ever talks to the
//! platform through this trait.

use crate::types::{Credentials, Invite, PatientData, Permissions, User};
use async_trait::async_trait;

/// Blip platform API client trait
///
/// Every async call resolves exactly once, either to its payload or to an
/// error. Implementations decide about transport, session persistence and
/// token handling.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use blip_client::{BlipApi, User};
///
/// async fn care_team(client: &dyn BlipApi) -> anyhow::Result<Vec<User>> {
///     client.fetch_patients().await
/// }
/// ```
#[async_trait]
pub trait BlipApi: Send + Sync {
    /// Whether a session token is currently held
    fn is_authenticated(&self) -> bool;

    /// Log in and return the logged-in account
    async fn login(&self, credentials: &Credentials) -> anyhow::Result<User>;

    /// Drop the current session
    async fn logout(&self) -> anyhow::Result<()>;

    /// Fetch the logged-in account
    async fn fetch_user(&self) -> anyhow::Result<User>;

    /// Fetch a single patient by id
    ///
    /// The returned record carries the permissions the current viewer holds
    /// on that patient.
    async fn fetch_patient(&self, patient_id: &str) -> anyhow::Result<User>;

    /// Fetch all patients whose care team the viewer belongs to
    async fn fetch_patients(&self) -> anyhow::Result<Vec<User>>;

    /// Fetch the diabetes data of a patient
    async fn fetch_patient_data(&self, patient_id: &str) -> anyhow::Result<PatientData>;

    /// Fetch invitations sent by the viewer that are still pending
    async fn fetch_pending_sent_invites(&self) -> anyhow::Result<Vec<Invite>>;

    /// Fetch invitations addressed to the viewer that are still pending
    async fn fetch_pending_received_invites(&self) -> anyhow::Result<Vec<Invite>>;

    // === Mutations ===

    /// Update a patient profile, returning the stored record
    async fn update_patient(&self, patient: &User) -> anyhow::Result<User>;

    /// Change the permissions a care-team member holds on a patient
    async fn set_member_permissions(
        &self,
        patient_id: &str,
        member_id: &str,
        permissions: &Permissions,
    ) -> anyhow::Result<()>;

    /// Remove a member from a patient's care team
    async fn remove_member(&self, patient_id: &str, member_id: &str) -> anyhow::Result<()>;

    /// Invite someone to the viewer's care team
    async fn send_invite(&self, email: &str, permissions: &Permissions) -> anyhow::Result<Invite>;

    /// Withdraw a pending invitation
    async fn cancel_sent_invite(&self, email: &str) -> anyhow::Result<()>;

    /// Record acceptance of the terms of service
    async fn accept_terms(&self, accepted_at: &str) -> anyhow::Result<()>;

    /// Confirm a signup using the key from the confirmation email
    async fn confirm_signup(&self, signup_key: &str) -> anyhow::Result<()>;
}
