//! Shared store slice
//!
//! Entity collections fetched from the platform plus the working-status
//! tracker. Users live in one flat map so the logged-in user and the viewed
//! patient can be the same record.

use super::WorkingState;
use blip_client::{Invite, PatientData, User, UserId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlipState {
    pub all_users: HashMap<UserId, User>,
    pub logged_in_user_id: Option<UserId>,
    pub current_patient_in_view_id: Option<UserId>,
    /// Patients the logged-in user is a care-team member of
    pub member_patient_ids: Vec<UserId>,
    pub patient_data: HashMap<UserId, PatientData>,
    pub pending_sent_invites: Vec<Invite>,
    pub pending_received_invites: Vec<Invite>,
    pub working: WorkingState,
}

impl BlipState {
    pub fn logged_in_user(&self) -> Option<&User> {
        self.logged_in_user_id
            .as_ref()
            .and_then(|id| self.all_users.get(id))
    }

    pub fn current_patient(&self) -> Option<&User> {
        self.current_patient_in_view_id
            .as_ref()
            .and_then(|id| self.all_users.get(id))
    }

    pub fn member_patients(&self) -> Vec<&User> {
        self.member_patient_ids
            .iter()
            .filter_map(|id| self.all_users.get(id))
            .collect()
    }

    /// Insert or refresh a user record
    ///
    /// Records fetched without viewer permissions or care team (the account
    /// itself, list entries) keep what an earlier patient fetch stored.
    pub fn merge_user(&mut self, mut user: User) {
        if let Some(existing) = self.all_users.get(&user.userid) {
            if user.permissions.is_none() {
                user.permissions = existing.permissions;
            }
            if user.team.is_empty() {
                user.team = existing.team.clone();
            }
        }
        self.all_users.insert(user.userid.clone(), user);
    }

    /// Drop everything tied to the session, keeping the tracker
    pub fn clear_session(&mut self) {
        let working = std::mem::take(&mut self.working);
        *self = Self {
            working,
            ..Self::default()
        };
    }
}
