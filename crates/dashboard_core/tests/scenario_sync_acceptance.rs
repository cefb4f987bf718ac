use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dashboard_core::{
    views::{KpiMetric, KpiPanel, ValueFormat},
    ImprovementRule, RecordingRenderer, ScenarioStore, SharedSurface, ViewError,
};
use shared::domain::{Scenario, ScenarioState, ViewId};

#[test]
fn unregistered_view_is_skipped_on_next_transition() {
    let calls: Rc<RefCell<HashMap<&'static str, Vec<Scenario>>>> = Rc::default();
    let mut store = ScenarioStore::default();
    for name in ["kpis", "pareto", "heatmap"] {
        let calls = Rc::clone(&calls);
        store
            .views_mut()
            .register_fn(name, move |state: &ScenarioState| -> Result<(), ViewError> {
                calls.borrow_mut().entry(name).or_default().push(state.scenario);
                Ok(())
            });
    }

    let report = store.set_scenario(Scenario::After);
    assert_eq!(report.visited(), 3);

    assert!(store.unregister(&ViewId::from("pareto")));
    calls.borrow_mut().clear();
    let report = store.set_scenario(Scenario::Before);

    let calls = calls.borrow();
    assert!(!calls.contains_key("pareto"));
    assert_eq!(calls["kpis"], vec![Scenario::Before]);
    assert_eq!(calls["heatmap"], vec![Scenario::Before]);
    assert_eq!(report.updated, vec![ViewId::from("kpis"), ViewId::from("heatmap")]);
}

fn metric(prefix: &str, before: f64, after: f64, rule: ImprovementRule) -> KpiMetric {
    KpiMetric {
        value_element: format!("{prefix}-value").into(),
        delta_element: format!("{prefix}-delta").into(),
        before,
        after,
        unit: "%".into(),
        format: ValueFormat::Percent,
        rule,
    }
}

#[test]
fn delta_tiles_are_blank_before_and_filled_after() {
    let recorder = RecordingRenderer::shared();
    let surface: SharedSurface = recorder.clone();
    let metrics = vec![
        metric("maverick", 22.0, 7.0, ImprovementRule::WhenAfter),
        metric("coverage", 64.0, 91.0, ImprovementRule::WhenBefore),
    ];
    let mut store = ScenarioStore::default();
    store.register("t3-kpis", Box::new(KpiPanel::new(metrics, surface)));

    store.resync();
    for prefix in ["maverick", "coverage"] {
        let delta: ViewId = format!("{prefix}-delta").into();
        assert_eq!(recorder.borrow().text(&delta), Some(""));
        assert_eq!(recorder.borrow().class(&delta), Some("kpi-delta"));
    }
    assert_eq!(recorder.borrow().text(&"maverick-value".into()), Some("22%"));

    store.set_scenario(Scenario::After);
    let recorder = recorder.borrow();
    assert_eq!(recorder.text(&"maverick-value".into()), Some("7%"));
    assert_eq!(recorder.text(&"maverick-delta".into()), Some("68% improvement"));
    assert_eq!(recorder.class(&"maverick-delta".into()), Some("kpi-delta positive"));
    assert_eq!(recorder.text(&"coverage-delta".into()), Some("42% improvement"));
    assert_eq!(recorder.class(&"coverage-delta".into()), Some("kpi-delta negative"));
}

#[test]
fn toggling_there_and_back_restores_before_output() {
    let recorder = RecordingRenderer::shared();
    let surface: SharedSurface = recorder.clone();
    let mut store = ScenarioStore::default();
    store.register(
        "t1-kpis",
        Box::new(KpiPanel::new(
            vec![metric("coverage", 70.0, 98.0, ImprovementRule::WhenAfter)],
            surface,
        )),
    );

    store.resync();
    let snapshot = |r: &RecordingRenderer| {
        (
            r.text(&"coverage-value".into()).map(str::to_string),
            r.text(&"coverage-delta".into()).map(str::to_string),
            r.class(&"coverage-delta".into()).map(str::to_string),
        )
    };
    let original = snapshot(&recorder.borrow());

    store.set_scenario(Scenario::After);
    assert_ne!(snapshot(&recorder.borrow()), original);
    store.set_scenario(Scenario::Before);
    assert_eq!(snapshot(&recorder.borrow()), original);
}
