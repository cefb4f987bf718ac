//! Feeds scripted UI events through a channel and applies them to the
//! dashboard on the owning thread.

use std::io::BufRead;

use crossbeam_channel::{Receiver, Sender};
use dashboard_core::{Dashboard, MountOutcome, SyncReport};
use shared::domain::ViewId;

use crate::controller::events::UiEvent;

#[derive(Debug)]
pub enum Dispatched {
    Synced(SyncReport),
    Mounted(Vec<(ViewId, MountOutcome)>),
    Destroyed { view_id: ViewId, known: bool },
}

pub fn dispatch_ui_event(dashboard: &mut Dashboard, event: UiEvent) -> Dispatched {
    tracing::debug!(event = event.name(), "dispatching ui event");
    match event {
        UiEvent::Toggle(checked) => Dispatched::Synced(dashboard.toggle(checked)),
        UiEvent::Scenario(scenario) => Dispatched::Synced(dashboard.set_scenario(scenario)),
        UiEvent::BusinessUnit(selector) => Dispatched::Synced(dashboard.set_business_unit(selector)),
        UiEvent::Region(selector) => Dispatched::Synced(dashboard.set_region(selector)),
        UiEvent::Resize => Dispatched::Synced(dashboard.resize()),
        UiEvent::Visible(view_id) => {
            let outcome = dashboard.visible(&view_id);
            Dispatched::Mounted(vec![(view_id, outcome)])
        }
        UiEvent::VisibleAll => Dispatched::Mounted(dashboard.reveal_all()),
        UiEvent::Destroyed(view_id) => {
            let known = dashboard.destroyed(&view_id);
            Dispatched::Destroyed { view_id, known }
        }
    }
}

/// Applies events until every sender is gone. Returns how many were applied.
pub fn run_event_loop(dashboard: &mut Dashboard, events: &Receiver<UiEvent>) -> usize {
    let mut applied = 0;
    for event in events.iter() {
        match dispatch_ui_event(dashboard, event) {
            Dispatched::Synced(report) if !report.is_clean() => {
                tracing::warn!(failed = report.failed.len(), "some views failed to update");
            }
            Dispatched::Mounted(outcomes) => {
                for (view_id, outcome) in outcomes {
                    tracing::debug!(view_id = %view_id, ?outcome, "visibility handled");
                }
            }
            Dispatched::Destroyed { view_id, known: false } => {
                tracing::warn!(view_id = %view_id, "destroy for unknown view");
            }
            _ => {}
        }
        applied += 1;
    }
    applied
}

/// Parses script lines and queues their events. Bad lines are logged and
/// skipped; stops early if the receiver is gone.
pub fn feed_script<R: BufRead>(reader: R, events: &Sender<UiEvent>) -> anyhow::Result<usize> {
    let mut queued = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let event = match UiEvent::parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(line = index + 1, error = %err, "skipping script line");
                continue;
            }
        };
        if events.send(event).is_err() {
            tracing::warn!("event loop disconnected; dropping remaining script");
            break;
        }
        queued += 1;
    }
    Ok(queued)
}
