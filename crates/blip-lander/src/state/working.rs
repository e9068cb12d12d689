//! Working-status tracker
//!
//! One record per operation kind. `in_progress` holds strictly between the
//! begin of the latest request of a kind and its terminal action.

use crate::domain_models::{ApiFailure, OperationKind};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingStatus {
    pub in_progress: bool,
    /// Error of the last failed request, until the next begin or dismissal
    pub notification: Option<ApiFailure>,
    /// Generation of the latest begin; 0 if the kind never started
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingState {
    statuses: BTreeMap<OperationKind, WorkingStatus>,
}

impl Default for WorkingState {
    fn default() -> Self {
        Self {
            statuses: OperationKind::iter()
                .map(|kind| (kind, WorkingStatus::default()))
                .collect(),
        }
    }
}

impl WorkingState {
    pub fn get(&self, kind: OperationKind) -> &WorkingStatus {
        // Every kind is inserted on construction and never removed.
        &self.statuses[&kind]
    }

    fn get_mut(&mut self, kind: OperationKind) -> &mut WorkingStatus {
        self.statuses.entry(kind).or_default()
    }

    pub fn in_progress(&self, kind: OperationKind) -> bool {
        self.get(kind).in_progress
    }

    pub fn notification(&self, kind: OperationKind) -> Option<&ApiFailure> {
        self.get(kind).notification.as_ref()
    }

    /// Whether a terminal action with `generation` belongs to the latest
    /// request of `kind`
    pub fn is_current(&self, kind: OperationKind, generation: u64) -> bool {
        self.get(kind).generation == generation
    }

    /// Whether a begin with `generation` is older than the latest recorded one
    pub fn is_superseded(&self, kind: OperationKind, generation: u64) -> bool {
        generation < self.get(kind).generation
    }

    /// Start tracking a request; an older begin arriving late is ignored
    pub fn begin(&mut self, kind: OperationKind, generation: u64) {
        let status = self.get_mut(kind);
        if generation < status.generation {
            return;
        }
        status.in_progress = true;
        status.notification = None;
        status.generation = generation;
    }

    pub fn succeed(&mut self, kind: OperationKind) {
        let status = self.get_mut(kind);
        status.in_progress = false;
        status.notification = None;
    }

    pub fn fail(&mut self, kind: OperationKind, error: ApiFailure) {
        let status = self.get_mut(kind);
        status.in_progress = false;
        status.notification = Some(error);
    }

    pub fn dismiss(&mut self, kind: OperationKind) {
        self.get_mut(kind).notification = None;
    }
}
