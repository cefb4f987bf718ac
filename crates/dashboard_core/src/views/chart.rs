use std::rc::Rc;

use serde_json::Value;
use shared::domain::{ScenarioState, ViewId};
use tracing::debug;

use crate::{
    lifecycle::MountFn,
    render::{ChartHandle, MergeMode, SharedRenderer},
    view::{UpdatableView, ViewError},
};

/// Option builders for one chart element.
pub trait ChartSpec {
    /// Full option set applied once when the chart is attached.
    fn options(&self, state: &ScenarioState) -> Value;

    /// Data-only delta pushed on every transition.
    fn update(&self, state: &ScenarioState) -> Value;

    fn merge_mode(&self) -> MergeMode {
        MergeMode::Normal
    }
}

/// A chart bound to one collaborator instance.
pub struct ChartView {
    id: ViewId,
    renderer: SharedRenderer,
    handle: ChartHandle,
    spec: Box<dyn ChartSpec>,
}

impl ChartView {
    /// Initializes the collaborator instance and configures it for `state`.
    pub fn mount(
        id: ViewId,
        renderer: SharedRenderer,
        spec: Box<dyn ChartSpec>,
        state: &ScenarioState,
    ) -> Result<Self, ViewError> {
        let handle = renderer.borrow_mut().init(&id)?;
        renderer
            .borrow_mut()
            .set_option(handle, spec.options(state), MergeMode::Normal)?;
        debug!(view_id = %id, handle = %handle, "configured chart");
        Ok(Self {
            id,
            renderer,
            handle,
            spec,
        })
    }
}

impl UpdatableView for ChartView {
    fn update(&mut self, state: &ScenarioState) -> Result<(), ViewError> {
        let delta = self.spec.update(state);
        self.renderer
            .borrow_mut()
            .set_option(self.handle, delta, self.spec.merge_mode())?;
        debug!(view_id = %self.id, scenario = %state.scenario, "pushed chart update");
        Ok(())
    }

    fn relayout(&mut self) -> Result<(), ViewError> {
        self.renderer.borrow_mut().resize(self.handle)?;
        Ok(())
    }
}

/// Deferred mount for a chart, run on first visibility.
pub fn chart_mount(id: ViewId, renderer: &SharedRenderer, spec: Box<dyn ChartSpec>) -> MountFn {
    let renderer = Rc::clone(renderer);
    Box::new(
        move |state: &ScenarioState| -> Result<Box<dyn UpdatableView>, ViewError> {
            let view = ChartView::mount(id, renderer, spec, state)?;
            Ok(Box::new(view))
        },
    )
}
