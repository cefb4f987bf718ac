use dashboard_core::{
    Dashboard, Lifecycle, MountOutcome, RecordingRenderer, ScenarioStore, SharedRenderer,
    SharedSurface,
};
use demo_data::{install, Jitter, CHART_IDS};
use shared::{domain::ViewId, error::CHART_FAILURE_MESSAGE};

fn dashboard(recorder: &std::rc::Rc<std::cell::RefCell<RecordingRenderer>>) -> Dashboard {
    let renderer: SharedRenderer = recorder.clone();
    let surface: SharedSurface = recorder.clone();
    let mut dashboard = Dashboard::new(ScenarioStore::default(), renderer);
    install(&mut dashboard, &surface, Jitter::new(2024));
    dashboard
}

#[test]
fn install_paints_kpis_and_defers_charts() {
    let recorder = RecordingRenderer::shared();
    let mut dashboard = dashboard(&recorder);

    let report = dashboard.start();
    assert_eq!(report.visited(), 5);
    assert!(report.is_clean());
    assert_eq!(dashboard.unattached().len(), CHART_IDS.len());
    assert_eq!(recorder.borrow().attached_count(), 0);
    assert_eq!(recorder.borrow().text(&"t1-duplicates".into()), Some("487"));
    assert_eq!(recorder.borrow().text(&"t1-duplicates-delta".into()), Some(""));
}

#[test]
fn toggling_after_updates_attached_charts_and_tiles() {
    let recorder = RecordingRenderer::shared();
    let mut dashboard = dashboard(&recorder);
    dashboard.start();

    let heatmap = ViewId::from("t3-heatmap");
    assert_eq!(dashboard.visible(&heatmap), MountOutcome::Attached);

    let report = dashboard.toggle(true);
    assert_eq!(report.visited(), 6);
    let recorder = recorder.borrow();
    assert_eq!(recorder.text(&"t3-maverick-spend".into()), Some("7%"));
    assert_eq!(recorder.text(&"t3-maverick-delta".into()), Some("68% improvement"));
    assert!(recorder.last_delta(&heatmap).is_some());
    assert!(recorder.handle_for(&"t1-treemap".into()).is_none());
}

#[test]
fn round_trip_restores_chart_updates() {
    let recorder = RecordingRenderer::shared();
    let mut dashboard = dashboard(&recorder);
    dashboard.start();
    dashboard.reveal_all();

    dashboard.toggle(false);
    let before: Vec<_> = CHART_IDS
        .iter()
        .map(|id| recorder.borrow().last_delta(&ViewId::from(*id)).cloned())
        .collect();
    dashboard.toggle(true);
    dashboard.toggle(false);
    let again: Vec<_> = CHART_IDS
        .iter()
        .map(|id| recorder.borrow().last_delta(&ViewId::from(*id)).cloned())
        .collect();
    assert_eq!(before, again);
}

#[test]
fn failed_chart_shows_fallback_and_others_still_sync() {
    let recorder = RecordingRenderer::shared();
    recorder.borrow_mut().fail_init_for("t4-boxplot");
    let mut dashboard = dashboard(&recorder);
    dashboard.start();

    let outcomes = dashboard.reveal_all();
    let failed: Vec<_> = outcomes
        .iter()
        .filter(|(_, outcome)| matches!(outcome, MountOutcome::Failed(_)))
        .map(|(id, _)| id.as_str().to_string())
        .collect();
    assert_eq!(failed, vec!["t4-boxplot"]);

    let boxplot = ViewId::from("t4-boxplot");
    assert_eq!(dashboard.lifecycle(&boxplot), Some(Lifecycle::Failed));
    assert_eq!(recorder.borrow().fallback(&boxplot), Some(CHART_FAILURE_MESSAGE));

    let report = dashboard.toggle(true);
    assert_eq!(report.visited(), 5 + CHART_IDS.len() - 1);
    assert!(report.is_clean());
}

#[test]
fn missing_tile_element_only_fails_its_own_panel() {
    let recorder = RecordingRenderer::shared();
    recorder.borrow_mut().fail_text_for("t1-duplicates");
    let mut dashboard = dashboard(&recorder);

    let report = dashboard.set_scenario(shared::domain::Scenario::After);

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].view_id, ViewId::from("t1-kpis"));
    let recorder = recorder.borrow();
    assert_eq!(recorder.text(&"t1-missing-category".into()), Some("$0.2M"));
    assert_eq!(recorder.text(&"t1-missing-delta".into()), Some("91% improvement"));
    assert_eq!(recorder.text(&"t2-supplier-count".into()), Some("763"));
}
