use shared::domain::ScenarioState;
use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("view data unavailable: {0}")]
    Data(String),
}

/// Capability every registered view exposes to the synchronizer.
///
/// `update` must be pure with respect to the state it receives: the same
/// state always pushes the same output to the collaborator.
pub trait UpdatableView {
    fn update(&mut self, state: &ScenarioState) -> Result<(), ViewError>;

    /// Re-layout after a viewport resize. Views without a chart have nothing to do.
    fn relayout(&mut self) -> Result<(), ViewError> {
        Ok(())
    }
}

/// Adapts a closure into a view.
pub struct FnView<F>(pub F);

impl<F> UpdatableView for FnView<F>
where
    F: FnMut(&ScenarioState) -> Result<(), ViewError>,
{
    fn update(&mut self, state: &ScenarioState) -> Result<(), ViewError> {
        (self.0)(state)
    }
}
