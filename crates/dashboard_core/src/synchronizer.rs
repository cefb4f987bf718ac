//! Fan-out of scenario changes to registered views.

use shared::domain::{ScenarioState, ViewId};
use tracing::{debug, error, warn};

use crate::view::{FnView, UpdatableView, ViewError};

struct Registration {
    id: ViewId,
    view: Box<dyn UpdatableView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewFailure {
    pub view_id: ViewId,
    pub reason: String,
}

/// Outcome of one dispatch pass, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub updated: Vec<ViewId>,
    pub failed: Vec<ViewFailure>,
    pub skipped: bool,
}

impl SyncReport {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn visited(&self) -> usize {
        self.updated.len() + self.failed.len()
    }
}

#[derive(Default)]
pub struct ViewSynchronizer {
    views: Vec<Registration>,
}

impl ViewSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the association without invoking the view. Re-registering an
    /// id replaces its view and keeps its original position.
    pub fn register(&mut self, view_id: impl Into<ViewId>, view: Box<dyn UpdatableView>) {
        let view_id = view_id.into();
        if let Some(existing) = self.views.iter_mut().find(|r| r.id == view_id) {
            warn!(view_id = %view_id, "replacing registered view");
            existing.view = view;
            return;
        }
        debug!(view_id = %view_id, "registered view");
        self.views.push(Registration { id: view_id, view });
    }

    pub fn register_fn<F>(&mut self, view_id: impl Into<ViewId>, update: F)
    where
        F: FnMut(&ScenarioState) -> Result<(), ViewError> + 'static,
    {
        self.register(view_id, Box::new(FnView(update)));
    }

    pub fn unregister(&mut self, view_id: &ViewId) -> Option<Box<dyn UpdatableView>> {
        let index = self.views.iter().position(|r| &r.id == view_id)?;
        debug!(view_id = %view_id, "unregistered view");
        Some(self.views.remove(index).view)
    }

    pub fn contains(&self, view_id: &ViewId) -> bool {
        self.views.iter().any(|r| &r.id == view_id)
    }

    pub fn ids(&self) -> Vec<ViewId> {
        self.views.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Invokes every view once with `state`. A failing view is logged and
    /// the pass continues with the next one.
    pub fn notify_all(&mut self, state: &ScenarioState) -> SyncReport {
        self.each_view(|view| view.update(state), "view update failed")
    }

    /// Non-mutating re-layout pass, used on viewport resize.
    pub fn relayout_all(&mut self) -> SyncReport {
        self.each_view(|view| view.relayout(), "view relayout failed")
    }

    fn each_view<F>(&mut self, mut op: F, failure: &'static str) -> SyncReport
    where
        F: FnMut(&mut dyn UpdatableView) -> Result<(), ViewError>,
    {
        let mut report = SyncReport::default();
        for registration in &mut self.views {
            match op(registration.view.as_mut()) {
                Ok(()) => report.updated.push(registration.id.clone()),
                Err(err) => {
                    error!(view_id = %registration.id, error = %err, "{failure}");
                    report.failed.push(ViewFailure {
                        view_id: registration.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        report
    }
}

#[cfg(test)]
#[path = "tests/synchronizer_tests.rs"]
mod tests;
