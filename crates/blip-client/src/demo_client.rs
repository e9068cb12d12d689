//! In-memory demo client
//!
//! Serves a small fixture of accounts, care teams, invitations and device
//! data without touching the network. Used for the demo mode of the
//! application and as a realistic backend in tests.

use crate::client::BlipApi;
use crate::types::{Credentials, Invite, InviteStatus, PatientData, Permissions, User, UserId};
use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;

const BUNDLED_FIXTURE: &str = include_str!("../fixtures/demo.json");

#[derive(Debug, Clone, Deserialize)]
struct DemoAccount {
    username: String,
    password: String,
    userid: UserId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Membership {
    member_id: UserId,
    patient_id: UserId,
    #[serde(default)]
    permissions: Permissions,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DemoFixture {
    #[serde(default)]
    accounts: Vec<DemoAccount>,
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    memberships: Vec<Membership>,
    #[serde(default)]
    data: Vec<PatientData>,
    #[serde(default)]
    sent_invites: Vec<Invite>,
    #[serde(default)]
    received_invites: Vec<Invite>,
    #[serde(default)]
    signup_keys: Vec<String>,
}

#[derive(Debug, Default)]
struct DemoState {
    fixture: DemoFixture,
    session: Option<UserId>,
    next_invite: usize,
}

impl DemoState {
    fn session_user_id(&self) -> anyhow::Result<UserId> {
        self.session
            .clone()
            .ok_or_else(|| anyhow!("Not logged in"))
    }

    fn user(&self, userid: &str) -> anyhow::Result<&User> {
        self.fixture
            .users
            .iter()
            .find(|u| u.userid == userid)
            .ok_or_else(|| anyhow!("User {} not found", userid))
    }

    /// Permissions `viewer` holds on `patient_id`, if any
    fn permissions_on(&self, viewer: &str, patient_id: &str) -> Option<Permissions> {
        if viewer == patient_id {
            return Some(Permissions {
                root: true,
                ..Permissions::default()
            });
        }
        self.fixture
            .memberships
            .iter()
            .find(|m| m.member_id == viewer && m.patient_id == patient_id)
            .map(|m| m.permissions)
    }

    fn patient_for_viewer(&self, viewer: &str, patient_id: &str) -> anyhow::Result<User> {
        let permissions = self
            .permissions_on(viewer, patient_id)
            .ok_or_else(|| anyhow!("You do not have access to patient {}", patient_id))?;
        let user = self.user(patient_id)?;
        if !user.is_patient() {
            bail!("User {} has no patient profile", patient_id);
        }
        let mut patient = user.clone();
        patient.permissions = Some(permissions);
        patient.team = self
            .fixture
            .memberships
            .iter()
            .filter(|m| m.patient_id == patient_id)
            .filter_map(|m| {
                let mut member = self.user(&m.member_id).ok()?.clone();
                member.permissions = Some(m.permissions);
                Some(member)
            })
            .collect();
        Ok(patient)
    }

    fn require_owner(&self, patient_id: &str) -> anyhow::Result<UserId> {
        let viewer = self.session_user_id()?;
        match self.permissions_on(&viewer, patient_id) {
            Some(p) if p.root || p.custodian => Ok(viewer),
            _ => bail!("Only the owner can manage the care team of {}", patient_id),
        }
    }
}

/// In-memory `BlipApi` implementation backed by a JSON fixture
#[derive(Debug)]
pub struct DemoClient {
    state: Mutex<DemoState>,
    latency: Duration,
}

impl DemoClient {
    /// Create a client from fixture JSON
    pub fn from_fixture_str(json: &str) -> anyhow::Result<Self> {
        let fixture: DemoFixture =
            serde_json::from_str(json).context("Failed to parse demo fixture")?;
        log::debug!(
            "Demo fixture loaded: {} users, {} memberships",
            fixture.users.len(),
            fixture.memberships.len()
        );
        Ok(Self {
            state: Mutex::new(DemoState {
                fixture,
                session: None,
                next_invite: 1,
            }),
            latency: Duration::ZERO,
        })
    }

    /// Create a client serving the fixture bundled with this crate
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_fixture_str(BUNDLED_FIXTURE)
    }

    /// Delay every call by `latency` to mimic a remote service
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut DemoState) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow!("Demo client state poisoned"))?;
        f(&mut *state)
    }
}

#[async_trait]
impl BlipApi for DemoClient {
    fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .map(|s| s.session.is_some())
            .unwrap_or(false)
    }

    async fn login(&self, credentials: &Credentials) -> anyhow::Result<User> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let account = state
                .fixture
                .accounts
                .iter()
                .find(|a| a.username == credentials.username && a.password == credentials.password)
                .ok_or_else(|| anyhow!("Wrong username or password"))?;
            let userid = account.userid.clone();
            let user = state.user(&userid)?.clone();
            state.session = Some(userid);
            log::info!("Demo login as {}", user.username);
            Ok(user)
        })
    }

    async fn logout(&self) -> anyhow::Result<()> {
        self.simulate_latency().await;
        self.with_state(|state| {
            state.session = None;
            Ok(())
        })
    }

    async fn fetch_user(&self) -> anyhow::Result<User> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let userid = state.session_user_id()?;
            state.user(&userid).cloned()
        })
    }

    async fn fetch_patient(&self, patient_id: &str) -> anyhow::Result<User> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            state.patient_for_viewer(&viewer, patient_id)
        })
    }

    async fn fetch_patients(&self) -> anyhow::Result<Vec<User>> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            state
                .fixture
                .memberships
                .iter()
                .filter(|m| m.member_id == viewer)
                .map(|m| state.patient_for_viewer(&viewer, &m.patient_id))
                .collect()
        })
    }

    async fn fetch_patient_data(&self, patient_id: &str) -> anyhow::Result<PatientData> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            state.patient_for_viewer(&viewer, patient_id)?;
            Ok(state
                .fixture
                .data
                .iter()
                .find(|d| d.patient_id == patient_id)
                .cloned()
                .unwrap_or_else(|| PatientData {
                    patient_id: patient_id.to_string(),
                    data: Vec::new(),
                }))
        })
    }

    async fn fetch_pending_sent_invites(&self) -> anyhow::Result<Vec<Invite>> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            Ok(state
                .fixture
                .sent_invites
                .iter()
                .filter(|i| i.creator_id == viewer && i.status == InviteStatus::Pending)
                .cloned()
                .collect())
        })
    }

    async fn fetch_pending_received_invites(&self) -> anyhow::Result<Vec<Invite>> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            let emails = state.user(&viewer)?.emails.clone();
            Ok(state
                .fixture
                .received_invites
                .iter()
                .filter(|i| emails.contains(&i.email) && i.status == InviteStatus::Pending)
                .map(|i| {
                    let mut invite = i.clone();
                    invite.creator = state.user(&i.creator_id).ok().cloned();
                    invite
                })
                .collect())
        })
    }

    async fn update_patient(&self, patient: &User) -> anyhow::Result<User> {
        self.simulate_latency().await;
        self.with_state(|state| {
            state.require_owner(&patient.userid)?;
            let stored = state
                .fixture
                .users
                .iter_mut()
                .find(|u| u.userid == patient.userid)
                .ok_or_else(|| anyhow!("User {} not found", patient.userid))?;
            stored.profile = patient.profile.clone();
            Ok(stored.clone())
        })
    }

    async fn set_member_permissions(
        &self,
        patient_id: &str,
        member_id: &str,
        permissions: &Permissions,
    ) -> anyhow::Result<()> {
        self.simulate_latency().await;
        self.with_state(|state| {
            state.require_owner(patient_id)?;
            let membership = state
                .fixture
                .memberships
                .iter_mut()
                .find(|m| m.member_id == member_id && m.patient_id == patient_id)
                .ok_or_else(|| anyhow!("{} is not a member of this care team", member_id))?;
            membership.permissions = *permissions;
            Ok(())
        })
    }

    async fn remove_member(&self, patient_id: &str, member_id: &str) -> anyhow::Result<()> {
        self.simulate_latency().await;
        self.with_state(|state| {
            state.require_owner(patient_id)?;
            let before = state.fixture.memberships.len();
            state
                .fixture
                .memberships
                .retain(|m| !(m.member_id == member_id && m.patient_id == patient_id));
            if state.fixture.memberships.len() == before {
                bail!("{} is not a member of this care team", member_id);
            }
            Ok(())
        })
    }

    async fn send_invite(&self, email: &str, permissions: &Permissions) -> anyhow::Result<Invite> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            let duplicate = state.fixture.sent_invites.iter().any(|i| {
                i.creator_id == viewer && i.email == email && i.status == InviteStatus::Pending
            });
            if duplicate {
                bail!("An invitation to {} is already pending", email);
            }
            let invite = Invite {
                key: format!("demo-invite-{}", state.next_invite),
                creator_id: viewer,
                email: email.to_string(),
                context: *permissions,
                status: InviteStatus::Pending,
                creator: None,
            };
            state.next_invite += 1;
            state.fixture.sent_invites.push(invite.clone());
            Ok(invite)
        })
    }

    async fn cancel_sent_invite(&self, email: &str) -> anyhow::Result<()> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            let invite = state
                .fixture
                .sent_invites
                .iter_mut()
                .find(|i| {
                    i.creator_id == viewer && i.email == email && i.status == InviteStatus::Pending
                })
                .ok_or_else(|| anyhow!("No pending invitation to {}", email))?;
            invite.status = InviteStatus::PendingCancelled;
            Ok(())
        })
    }

    async fn accept_terms(&self, accepted_at: &str) -> anyhow::Result<()> {
        self.simulate_latency().await;
        self.with_state(|state| {
            let viewer = state.session_user_id()?;
            let user = state
                .fixture
                .users
                .iter_mut()
                .find(|u| u.userid == viewer)
                .ok_or_else(|| anyhow!("User {} not found", viewer))?;
            user.terms_accepted = Some(accepted_at.to_string());
            Ok(())
        })
    }

    async fn confirm_signup(&self, signup_key: &str) -> anyhow::Result<()> {
        self.simulate_latency().await;
        self.with_state(|state| {
            if state.fixture.signup_keys.iter().any(|k| k == signup_key) {
                Ok(())
            } else {
                bail!("Signup key {} is not valid", signup_key)
            }
        })
    }
}
