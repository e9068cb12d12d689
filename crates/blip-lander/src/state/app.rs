//! Application State

use super::{BlipState, PromptState, RootViewState};
use blip_config::AppConfig;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub blip: BlipState,
    pub root: RootViewState,
    pub prompt: PromptState,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, root: RootViewState) -> Self {
        Self {
            running: true,
            blip: BlipState::default(),
            root,
            prompt: PromptState::default(),
            config,
        }
    }

    /// Names of the slices that differ between `self` and `previous`
    pub fn changed_slices(&self, previous: &AppState) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.running != previous.running {
            changed.push("running");
        }
        if self.blip != previous.blip {
            changed.push("blip");
        }
        if self.root != previous.root {
            changed.push("root");
        }
        if self.prompt != previous.prompt {
            changed.push("prompt");
        }
        changed
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), RootViewState::default())
    }
}
