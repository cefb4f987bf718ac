//! Demo content for the procurement toggle dashboard: chart specs, KPI
//! tables, and the optional aggregates document.

pub mod charts;
pub mod document;
pub mod jitter;
pub mod kpis;
pub mod palette;

use dashboard_core::{Dashboard, SharedSurface};

pub use charts::{chart_catalog, CHART_IDS};
pub use document::{
    load_document, mock_document, resolve_source, DataSourceError, DocumentOrigin,
    DocumentSource, FileSource, HttpSource, LoadedDocument,
};
pub use jitter::Jitter;
pub use kpis::{kpi_metrics, kpi_panels};

/// Registers every KPI panel eagerly and declares every chart lazily.
pub fn install(dashboard: &mut Dashboard, surface: &SharedSurface, jitter: Jitter) {
    for (id, panel) in kpi_panels(surface) {
        dashboard.register_view(id, Box::new(panel));
    }
    for (id, spec) in chart_catalog(jitter) {
        dashboard.declare_chart(id, spec);
    }
}
