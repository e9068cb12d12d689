//! Operation kinds
//!
//! Every distinguishable asynchronous API operation gets one kind. The
//! working-status tracker keeps exactly one record per kind.

use strum::{Display, EnumIter, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum OperationKind {
    LoggingIn,
    LoggingOut,
    FetchingUser,
    FetchingPatient,
    FetchingPatients,
    FetchingPatientData,
    FetchingPendingSentInvites,
    FetchingPendingReceivedInvites,
    UpdatingPatient,
    SettingMemberPermissions,
    RemovingMember,
    SendingInvite,
    CancellingSentInvite,
    AcceptingTerms,
    ConfirmingSignup,
}

impl OperationKind {
    /// Human readable description used in failure banners
    pub fn description(&self) -> &'static str {
        match self {
            Self::LoggingIn => "log in",
            Self::LoggingOut => "log out",
            Self::FetchingUser => "load your account",
            Self::FetchingPatient => "load the patient",
            Self::FetchingPatients => "load your care team list",
            Self::FetchingPatientData => "load patient data",
            Self::FetchingPendingSentInvites => "load sent invitations",
            Self::FetchingPendingReceivedInvites => "load invitations",
            Self::UpdatingPatient => "update the profile",
            Self::SettingMemberPermissions => "change member permissions",
            Self::RemovingMember => "remove the member",
            Self::SendingInvite => "send the invitation",
            Self::CancellingSentInvite => "cancel the invitation",
            Self::AcceptingTerms => "accept the terms of use",
            Self::ConfirmingSignup => "confirm your signup",
        }
    }
}
