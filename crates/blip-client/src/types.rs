//! Blip API data transfer objects
//!
//! These types represent the data returned from the platform API.
//! They are intentionally separate from application state
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform user id (opaque hex string)
pub type UserId = String;

/// A platform account
///
/// Patients are users too: a user with a patient sub-profile. The logged-in
/// operator can therefore be the patient they are looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id
    pub userid: UserId,

    /// Login name (an email address)
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub emails: Vec<String>,

    #[serde(default)]
    pub profile: Option<Profile>,

    /// Timestamp the terms of service were accepted, if ever
    #[serde(default)]
    pub terms_accepted: Option<String>,

    /// Permissions the current viewer holds on this account
    #[serde(default)]
    pub permissions: Option<Permissions>,

    /// Care-team members of a patient, each carrying the permissions they
    /// hold on this account
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<User>,
}

impl User {
    /// Full name from the profile, falling back to the username
    pub fn full_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.full_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Whether this account carries a patient sub-profile
    pub fn is_patient(&self) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|p| p.patient.is_some())
    }

    pub fn has_accepted_terms(&self) -> bool {
        self.terms_accepted
            .as_deref()
            .is_some_and(|ts| !ts.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub patient: Option<PatientProfile>,
}

/// Care-recipient details attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub diagnosis_date: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

/// Permission set one account holds on another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Owner of the account
    #[serde(default)]
    pub root: bool,
    #[serde(default)]
    pub custodian: bool,
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub upload: bool,
}

impl Permissions {
    pub fn view_only() -> Self {
        Self {
            view: true,
            ..Self::default()
        }
    }

    pub fn view_and_upload() -> Self {
        Self {
            view: true,
            upload: true,
            ..Self::default()
        }
    }
}

/// Lifecycle status of an invitation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InviteStatus {
    #[default]
    Pending,
    PendingCancelled,
}

/// A pending care-team invitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    /// Confirmation key
    pub key: String,
    /// Account that sent the invite
    pub creator_id: UserId,
    /// Recipient email address
    pub email: String,
    /// Permissions offered to the recipient
    #[serde(default)]
    pub context: Permissions,
    #[serde(default)]
    pub status: InviteStatus,
    /// Display data of the sender, when the API includes it
    #[serde(default)]
    pub creator: Option<User>,
}

/// One device record (glucose reading, bolus, note...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Record type, e.g. "cbg", "smbg", "bolus"
    #[serde(rename = "type")]
    pub datum_type: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub units: Option<String>,
}

/// Diabetes data of a single patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientData {
    pub patient_id: UserId,
    #[serde(default)]
    pub data: Vec<Datum>,
}

impl PatientData {
    /// Most recent record, if any
    pub fn latest(&self) -> Option<&Datum> {
        self.data.iter().max_by_key(|d| d.time)
    }
}

/// Login credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
