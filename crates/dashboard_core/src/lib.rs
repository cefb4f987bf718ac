//! Scenario-driven view synchronization for toggle dashboards.
//!
//! A [`ScenarioStore`] owns the single active [`ScenarioState`]; its setters
//! fan the new state out through a [`ViewSynchronizer`] to every registered
//! [`UpdatableView`], synchronously and in registration order. Charts attach
//! lazily on visibility via [`LazyViews`] and talk to the rendering
//! collaborator only through the traits in [`render`].
//!
//! [`ScenarioState`]: shared::domain::ScenarioState

pub mod dashboard;
pub mod delta;
pub mod lifecycle;
pub mod render;
pub mod series;
pub mod store;
pub mod synchronizer;
pub mod view;
pub mod views;

pub use dashboard::Dashboard;
pub use delta::{percent_change, DeltaDisplay, DeltaText, ImprovementRule};
pub use lifecycle::{LazyViews, Lifecycle, MountOutcome};
pub use render::{
    ChartHandle, ChartRenderer, MergeMode, RecordingRenderer, RenderError, SharedRenderer,
    SharedSurface, TextSurface,
};
pub use series::cumulative_percent;
pub use store::ScenarioStore;
pub use synchronizer::{SyncReport, ViewFailure, ViewSynchronizer};
pub use view::{FnView, UpdatableView, ViewError};
