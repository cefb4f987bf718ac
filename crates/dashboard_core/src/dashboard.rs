//! Event-facing facade: owns the store, the lazy view registry and the
//! collaborator, and maps each UI signal onto them.

use shared::{
    domain::{Scenario, Selector, ViewId},
    error::UserNotice,
};
use tracing::warn;

use crate::{
    lifecycle::{LazyViews, Lifecycle, MountOutcome},
    render::SharedRenderer,
    store::ScenarioStore,
    synchronizer::SyncReport,
    view::UpdatableView,
    views::{chart_mount, ChartSpec},
};

pub struct Dashboard {
    store: ScenarioStore,
    lazy: LazyViews,
    renderer: SharedRenderer,
}

impl Dashboard {
    pub fn new(store: ScenarioStore, renderer: SharedRenderer) -> Self {
        Self {
            store,
            lazy: LazyViews::new(),
            renderer,
        }
    }

    /// Declares a chart that attaches on its first visibility signal.
    pub fn declare_chart(&mut self, id: impl Into<ViewId>, spec: Box<dyn ChartSpec>) {
        let id = id.into();
        let mount = chart_mount(id.clone(), &self.renderer, spec);
        self.lazy.declare(id, mount);
    }

    /// Registers an always-present view (KPI tiles). Not invoked until the
    /// next sync.
    pub fn register_view(&mut self, id: impl Into<ViewId>, view: Box<dyn UpdatableView>) {
        self.store.register(id, view);
    }

    /// Initial pass so eagerly registered views show the starting state.
    pub fn start(&mut self) -> SyncReport {
        self.store.resync()
    }

    pub fn toggle(&mut self, checked: bool) -> SyncReport {
        self.store.set_scenario(Scenario::from_toggle(checked))
    }

    pub fn set_scenario(&mut self, scenario: Scenario) -> SyncReport {
        self.store.set_scenario(scenario)
    }

    pub fn set_business_unit(&mut self, selector: Selector) -> SyncReport {
        self.store.set_business_unit(selector)
    }

    pub fn set_region(&mut self, selector: Selector) -> SyncReport {
        self.store.set_region(selector)
    }

    /// Visibility signal for one element. A chart that fails to attach gets
    /// the static fallback message; other views are untouched.
    pub fn visible(&mut self, id: &ViewId) -> MountOutcome {
        let outcome = self.lazy.on_visible(id, &mut self.store);
        match &outcome {
            MountOutcome::Failed(_) => {
                let notice = UserNotice::chart_failure();
                self.renderer.borrow_mut().show_fallback(id, &notice.message);
            }
            MountOutcome::Unknown => warn!(view_id = %id, "visibility for undeclared view"),
            _ => {}
        }
        outcome
    }

    /// Makes every still-unattached chart visible, in id order.
    pub fn reveal_all(&mut self) -> Vec<(ViewId, MountOutcome)> {
        self.lazy
            .unattached()
            .into_iter()
            .map(|id| {
                let outcome = self.visible(&id);
                (id, outcome)
            })
            .collect()
    }

    pub fn resize(&mut self) -> SyncReport {
        self.store.refresh_layout()
    }

    pub fn destroyed(&mut self, id: &ViewId) -> bool {
        self.lazy.on_destroyed(id, &mut self.store)
    }

    pub fn store(&self) -> &ScenarioStore {
        &self.store
    }

    pub fn lifecycle(&self, id: &ViewId) -> Option<Lifecycle> {
        self.lazy.lifecycle(id)
    }

    pub fn unattached(&self) -> Vec<ViewId> {
        self.lazy.unattached()
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
