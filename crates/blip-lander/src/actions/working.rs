//! Request lifecycle actions
//!
//! Every request emits `Begin` first, then exactly one of `Succeeded` or
//! `Failed`, all carrying the same generation.

use crate::domain_models::{ApiFailure, OperationKind};
use blip_client::{Invite, PatientData, Permissions, User, UserId};

#[derive(Debug, Clone)]
pub enum WorkingAction {
    Begin {
        kind: OperationKind,
        generation: u64,
    },
    Succeeded {
        generation: u64,
        payload: Payload,
    },
    Failed {
        kind: OperationKind,
        generation: u64,
        error: ApiFailure,
    },
}

impl WorkingAction {
    pub fn kind(&self) -> OperationKind {
        match self {
            WorkingAction::Begin { kind, .. } | WorkingAction::Failed { kind, .. } => *kind,
            WorkingAction::Succeeded { payload, .. } => payload.kind(),
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            WorkingAction::Begin { generation, .. }
            | WorkingAction::Succeeded { generation, .. }
            | WorkingAction::Failed { generation, .. } => *generation,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkingAction::Begin { .. })
    }
}

/// Result data of a successful request, merged into the store
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    LoggedIn(User),
    LoggedOut,
    User(User),
    Patient(User),
    Patients(Vec<User>),
    PatientData(PatientData),
    PendingSentInvites(Vec<Invite>),
    PendingReceivedInvites(Vec<Invite>),
    PatientUpdated(User),
    MemberPermissionsSet {
        patient_id: UserId,
        member_id: UserId,
        permissions: Permissions,
    },
    MemberRemoved {
        patient_id: UserId,
        member_id: UserId,
    },
    InviteSent(Invite),
    SentInviteCancelled {
        email: String,
    },
    TermsAccepted {
        accepted_at: String,
    },
    SignupConfirmed,
}

impl Payload {
    /// Operation kind that produces this payload
    pub fn kind(&self) -> OperationKind {
        match self {
            Payload::LoggedIn(_) => OperationKind::LoggingIn,
            Payload::LoggedOut => OperationKind::LoggingOut,
            Payload::User(_) => OperationKind::FetchingUser,
            Payload::Patient(_) => OperationKind::FetchingPatient,
            Payload::Patients(_) => OperationKind::FetchingPatients,
            Payload::PatientData(_) => OperationKind::FetchingPatientData,
            Payload::PendingSentInvites(_) => OperationKind::FetchingPendingSentInvites,
            Payload::PendingReceivedInvites(_) => OperationKind::FetchingPendingReceivedInvites,
            Payload::PatientUpdated(_) => OperationKind::UpdatingPatient,
            Payload::MemberPermissionsSet { .. } => OperationKind::SettingMemberPermissions,
            Payload::MemberRemoved { .. } => OperationKind::RemovingMember,
            Payload::InviteSent(_) => OperationKind::SendingInvite,
            Payload::SentInviteCancelled { .. } => OperationKind::CancellingSentInvite,
            Payload::TermsAccepted { .. } => OperationKind::AcceptingTerms,
            Payload::SignupConfirmed => OperationKind::ConfirmingSignup,
        }
    }
}
