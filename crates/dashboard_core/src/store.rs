//! Owned scenario state. Every setter re-synchronizes the registered views.

use shared::domain::{Scenario, ScenarioState, Selector, ViewId};
use tracing::{debug, info};

use crate::{
    synchronizer::{SyncReport, ViewSynchronizer},
    view::UpdatableView,
};

pub struct ScenarioStore {
    state: ScenarioState,
    views: ViewSynchronizer,
    skip_unchanged: bool,
}

impl ScenarioStore {
    pub fn new(initial: ScenarioState) -> Self {
        Self {
            state: initial,
            views: ViewSynchronizer::new(),
            skip_unchanged: false,
        }
    }

    /// When set, setters that leave the state unchanged do not re-notify.
    pub fn with_skip_unchanged(mut self, skip_unchanged: bool) -> Self {
        self.skip_unchanged = skip_unchanged;
        self
    }

    pub fn scenario(&self) -> Scenario {
        self.state.scenario
    }

    pub fn state(&self) -> &ScenarioState {
        &self.state
    }

    pub fn set_scenario(&mut self, next: Scenario) -> SyncReport {
        self.apply(|state| state.scenario = next)
    }

    pub fn set_business_unit(&mut self, selector: Selector) -> SyncReport {
        self.apply(|state| state.business_unit = selector)
    }

    pub fn set_region(&mut self, selector: Selector) -> SyncReport {
        self.apply(|state| state.region = selector)
    }

    /// Pushes the current state to every view without changing it.
    pub fn resync(&mut self) -> SyncReport {
        self.views.notify_all(&self.state)
    }

    pub fn refresh_layout(&mut self) -> SyncReport {
        self.views.relayout_all()
    }

    pub fn register(&mut self, view_id: impl Into<ViewId>, view: Box<dyn UpdatableView>) {
        self.views.register(view_id, view);
    }

    pub fn unregister(&mut self, view_id: &ViewId) -> bool {
        self.views.unregister(view_id).is_some()
    }

    pub fn views(&self) -> &ViewSynchronizer {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewSynchronizer {
        &mut self.views
    }

    fn apply<F>(&mut self, mutate: F) -> SyncReport
    where
        F: FnOnce(&mut ScenarioState),
    {
        let previous = self.state.clone();
        mutate(&mut self.state);
        if self.skip_unchanged && previous == self.state {
            debug!(scenario = %self.state.scenario, "state unchanged; skipping view sync");
            return SyncReport::skipped();
        }

        info!(
            scenario = %self.state.scenario,
            business_unit = %self.state.business_unit,
            region = %self.state.region,
            views = self.views.len(),
            "scenario state changed"
        );
        self.views.notify_all(&self.state)
    }
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new(ScenarioState::default())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
