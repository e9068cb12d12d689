//! API requests
//!
//! Intents handed to the action creators. Each request maps to one action
//! creator, which emits the begin/terminal lifecycle pair (two pairs for
//! the chained patient data request).

use blip_client::{Credentials, Permissions, User, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Login(Credentials),
    Logout,
    FetchUser,
    FetchPatient(UserId),
    /// Fetch the patient, then (only on success) that patient's data
    FetchPatientWithData(UserId),
    FetchPatients,
    FetchPendingSentInvites,
    FetchPendingReceivedInvites,
    UpdatePatient(User),
    SetMemberPermissions {
        patient_id: UserId,
        member_id: UserId,
        permissions: Permissions,
    },
    RemoveMember {
        patient_id: UserId,
        member_id: UserId,
    },
    SendInvite {
        email: String,
        permissions: Permissions,
    },
    CancelSentInvite {
        email: String,
    },
    AcceptTerms,
    ConfirmSignup(String),
}

impl ApiRequest {
    /// Whether the request starts a second lifecycle after the first succeeds
    pub fn is_chained(&self) -> bool {
        matches!(self, ApiRequest::FetchPatientWithData(_))
    }
}
