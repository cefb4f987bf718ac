//! Lazy attachment of views on first visibility.
//!
//! A declared view stays `Unattached` until its element becomes visible. The
//! visibility event mounts it against the store's state *at that moment* and
//! registers it with the synchronizer, so later transitions reach it.

use std::collections::HashMap;

use shared::domain::{ScenarioState, ViewId};
use tracing::{error, info, warn};

use crate::{
    store::ScenarioStore,
    view::{UpdatableView, ViewError},
};

pub type MountFn = Box<dyn FnOnce(&ScenarioState) -> Result<Box<dyn UpdatableView>, ViewError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unattached,
    Attached,
    /// Mounting failed; the element shows a static fallback instead.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    Attached,
    AlreadyAttached,
    Failed(String),
    PreviouslyFailed,
    Unknown,
}

#[derive(Default)]
pub struct LazyViews {
    pending: HashMap<ViewId, MountFn>,
    lifecycle: HashMap<ViewId, Lifecycle>,
}

impl LazyViews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, view_id: impl Into<ViewId>, mount: MountFn) {
        let view_id = view_id.into();
        if matches!(self.lifecycle.get(&view_id), Some(Lifecycle::Attached)) {
            warn!(view_id = %view_id, "ignoring re-declaration of attached view");
            return;
        }
        self.lifecycle.insert(view_id.clone(), Lifecycle::Unattached);
        self.pending.insert(view_id, mount);
    }

    pub fn lifecycle(&self, view_id: &ViewId) -> Option<Lifecycle> {
        self.lifecycle.get(view_id).copied()
    }

    pub fn unattached(&self) -> Vec<ViewId> {
        let mut ids: Vec<ViewId> = self.pending.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Handles a visibility signal. Only the first signal for a view mounts it.
    pub fn on_visible(&mut self, view_id: &ViewId, store: &mut ScenarioStore) -> MountOutcome {
        match self.lifecycle.get(view_id) {
            None => return MountOutcome::Unknown,
            Some(Lifecycle::Attached) => return MountOutcome::AlreadyAttached,
            Some(Lifecycle::Failed) => return MountOutcome::PreviouslyFailed,
            Some(Lifecycle::Unattached) => {}
        }

        let Some(mount) = self.pending.remove(view_id) else {
            return MountOutcome::Unknown;
        };

        let snapshot = store.state().clone();
        match mount(&snapshot) {
            Ok(view) => {
                store.register(view_id.clone(), view);
                self.lifecycle.insert(view_id.clone(), Lifecycle::Attached);
                info!(view_id = %view_id, scenario = %snapshot.scenario, "attached view");
                MountOutcome::Attached
            }
            Err(err) => {
                error!(view_id = %view_id, error = %err, "failed to attach view");
                self.lifecycle.insert(view_id.clone(), Lifecycle::Failed);
                MountOutcome::Failed(err.to_string())
            }
        }
    }

    /// Element destroyed: drop the view whatever its lifecycle stage.
    pub fn on_destroyed(&mut self, view_id: &ViewId, store: &mut ScenarioStore) -> bool {
        self.pending.remove(view_id);
        let known = self.lifecycle.remove(view_id).is_some();
        let registered = store.unregister(view_id);
        known || registered
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
