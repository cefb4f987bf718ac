use super::*;

use std::{cell::RefCell, rc::Rc};

use shared::domain::Scenario;

use crate::view::FnView;

fn recording_mount(mounted_with: &Rc<RefCell<Vec<Scenario>>>) -> MountFn {
    let mounted_with = Rc::clone(mounted_with);
    Box::new(move |state: &ScenarioState| -> Result<Box<dyn UpdatableView>, ViewError> {
        mounted_with.borrow_mut().push(state.scenario);
        let view: Box<dyn UpdatableView> =
            Box::new(FnView(|_state: &ScenarioState| -> Result<(), ViewError> { Ok(()) }));
        Ok(view)
    })
}

#[test]
fn declared_view_is_unattached_and_not_registered() {
    let mounted_with = Rc::new(RefCell::new(Vec::new()));
    let mut lazy = LazyViews::new();
    let store = ScenarioStore::default();
    lazy.declare("t2-pareto", recording_mount(&mounted_with));

    assert_eq!(lazy.lifecycle(&"t2-pareto".into()), Some(Lifecycle::Unattached));
    assert!(store.views().is_empty());
    assert!(mounted_with.borrow().is_empty());
}

#[test]
fn first_visibility_mounts_with_current_state() {
    let mounted_with = Rc::new(RefCell::new(Vec::new()));
    let mut lazy = LazyViews::new();
    let mut store = ScenarioStore::default();
    lazy.declare("t2-pareto", recording_mount(&mounted_with));

    store.set_scenario(Scenario::After);
    let outcome = lazy.on_visible(&"t2-pareto".into(), &mut store);

    assert_eq!(outcome, MountOutcome::Attached);
    assert_eq!(*mounted_with.borrow(), vec![Scenario::After]);
    assert!(store.views().contains(&"t2-pareto".into()));
    assert_eq!(lazy.lifecycle(&"t2-pareto".into()), Some(Lifecycle::Attached));
}

#[test]
fn repeated_visibility_does_not_remount() {
    let mounted_with = Rc::new(RefCell::new(Vec::new()));
    let mut lazy = LazyViews::new();
    let mut store = ScenarioStore::default();
    lazy.declare("t1-treemap", recording_mount(&mounted_with));

    lazy.on_visible(&"t1-treemap".into(), &mut store);
    let outcome = lazy.on_visible(&"t1-treemap".into(), &mut store);

    assert_eq!(outcome, MountOutcome::AlreadyAttached);
    assert_eq!(mounted_with.borrow().len(), 1);
    assert_eq!(store.views().len(), 1);
}

#[test]
fn failed_mount_is_recorded_and_not_registered() {
    let mut lazy = LazyViews::new();
    let mut store = ScenarioStore::default();
    lazy.declare(
        "t3-heatmap",
        Box::new(
            |_state: &ScenarioState| -> Result<Box<dyn UpdatableView>, ViewError> {
                Err(ViewError::Data("no canvas".into()))
            },
        ),
    );

    let outcome = lazy.on_visible(&"t3-heatmap".into(), &mut store);

    assert!(matches!(outcome, MountOutcome::Failed(reason) if reason.contains("no canvas")));
    assert_eq!(lazy.lifecycle(&"t3-heatmap".into()), Some(Lifecycle::Failed));
    assert!(store.views().is_empty());
}

#[test]
fn unknown_view_visibility_is_ignored() {
    let mut lazy = LazyViews::new();
    let mut store = ScenarioStore::default();
    assert_eq!(
        lazy.on_visible(&"nope".into(), &mut store),
        MountOutcome::Unknown
    );
}

#[test]
fn destroying_attached_view_unregisters_it() {
    let mounted_with = Rc::new(RefCell::new(Vec::new()));
    let mut lazy = LazyViews::new();
    let mut store = ScenarioStore::default();
    lazy.declare("t5-waterfall", recording_mount(&mounted_with));
    lazy.declare("t5-termsHistogram", recording_mount(&mounted_with));
    lazy.on_visible(&"t5-waterfall".into(), &mut store);

    assert!(lazy.on_destroyed(&"t5-waterfall".into(), &mut store));
    assert!(lazy.on_destroyed(&"t5-termsHistogram".into(), &mut store));
    assert!(!lazy.on_destroyed(&"t5-waterfall".into(), &mut store));
    assert!(store.views().is_empty());
    assert!(lazy.unattached().is_empty());
}
