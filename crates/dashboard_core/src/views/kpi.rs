use shared::domain::{Scenario, ScenarioState, ViewId};
use tracing::{debug, warn};

use crate::{
    delta::{DeltaDisplay, ImprovementRule},
    render::{RenderError, SharedSurface, TextSurface},
    view::{UpdatableView, ViewError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `98%`
    Percent,
    /// `1,247`
    Count,
    /// `$2.3M`
    Millions,
    /// `50`
    Plain,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Percent => format!("{value}%"),
            Self::Count => group_thousands(value),
            Self::Millions => format!("${value}M"),
            Self::Plain => format!("{value}"),
        }
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// One KPI tile: a value element and its delta indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiMetric {
    pub value_element: ViewId,
    pub delta_element: ViewId,
    pub before: f64,
    pub after: f64,
    pub unit: String,
    pub format: ValueFormat,
    pub rule: ImprovementRule,
}

impl KpiMetric {
    pub fn value_for(&self, scenario: Scenario) -> f64 {
        if scenario.is_after() {
            self.after
        } else {
            self.before
        }
    }

    pub fn display_value(&self, scenario: Scenario) -> String {
        self.format.format(self.value_for(scenario))
    }

    pub fn delta(&self, scenario: Scenario) -> DeltaDisplay {
        DeltaDisplay::derive(self.before, self.after, self.unit.clone(), self.rule, scenario)
    }
}

/// A group of KPI tiles refreshed together.
pub struct KpiPanel {
    metrics: Vec<KpiMetric>,
    surface: SharedSurface,
}

impl KpiPanel {
    pub fn new(metrics: Vec<KpiMetric>, surface: SharedSurface) -> Self {
        Self { metrics, surface }
    }
}

fn write_tile(
    surface: &mut dyn TextSurface,
    metric: &KpiMetric,
    scenario: Scenario,
) -> Result<(), RenderError> {
    surface.set_text(&metric.value_element, &metric.display_value(scenario))?;
    let delta = metric.delta(scenario).render(scenario);
    surface.set_class(&metric.delta_element, &delta.class)?;
    surface.set_text(&metric.delta_element, &delta.text)
}

impl UpdatableView for KpiPanel {
    /// Every tile is written even when a sibling fails; the first failure is
    /// returned once the panel is done.
    fn update(&mut self, state: &ScenarioState) -> Result<(), ViewError> {
        let mut surface = self.surface.borrow_mut();
        let mut first_failure = None;
        for metric in &self.metrics {
            match write_tile(&mut *surface, metric, state.scenario) {
                Ok(()) => debug!(
                    element = %metric.value_element,
                    movement = %metric.delta(state.scenario).describe(),
                    "updated kpi tile"
                ),
                Err(err) => {
                    warn!(element = %metric.value_element, error = %err, "kpi tile not updated");
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
            }
        }
        match first_failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
