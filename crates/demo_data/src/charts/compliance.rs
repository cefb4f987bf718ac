//! t3: on/off-contract spend and maverick spend by business unit.

use dashboard_core::{series::round_to, views::ChartSpec};
use serde_json::{json, Value};
use shared::domain::{Scenario, ScenarioState, Selector};

use crate::{
    charts::consolidation::CATEGORY_NAMES,
    jitter::Jitter,
    palette::{with_common, AMBER, GREEN, RED},
};

pub const BUSINESS_UNITS: [&str; 6] = ["Corporate", "Manufacturing", "Sales", "IT", "HR", "Finance"];

const ON_CONTRACT_BASE: [f64; 6] = [28.5, 24.1, 14.2, 12.1, 11.2, 8.9];
const OFF_CONTRACT_BASE: [f64; 6] = [16.7, 14.6, 8.2, 6.8, 4.4, 3.4];

pub fn on_contract_spend(scenario: Scenario) -> Vec<f64> {
    let factor = if scenario.is_after() { 1.4 } else { 1.0 };
    ON_CONTRACT_BASE.iter().map(|v| v * factor).collect()
}

pub fn off_contract_spend(scenario: Scenario) -> Vec<f64> {
    let factor = if scenario.is_after() { 0.3 } else { 1.0 };
    OFF_CONTRACT_BASE.iter().map(|v| v * factor).collect()
}

pub struct ComplianceStack;

impl ChartSpec for ComplianceStack {
    fn options(&self, state: &ScenarioState) -> Value {
        with_common(json!({
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
            "legend": { "data": ["On Contract", "Off Contract"] },
            "xAxis": { "type": "category", "data": CATEGORY_NAMES },
            "yAxis": { "type": "value", "name": "Spend ($M)", "axisLabel": { "formatter": "${value}M" } },
            "series": [
                {
                    "name": "On Contract",
                    "type": "bar",
                    "stack": "total",
                    "data": on_contract_spend(state.scenario),
                    "itemStyle": { "color": GREEN },
                },
                {
                    "name": "Off Contract",
                    "type": "bar",
                    "stack": "total",
                    "data": off_contract_spend(state.scenario),
                    "itemStyle": { "color": AMBER },
                },
            ],
        }))
    }

    fn update(&self, state: &ScenarioState) -> Value {
        json!({
            "series": [
                { "data": on_contract_spend(state.scenario) },
                { "data": off_contract_spend(state.scenario) },
            ]
        })
    }
}

/// `[category_index, unit_index, maverick_pct]`
pub type HeatCell = (usize, usize, f64);

/// Maverick spend per category and business unit: `draw * 25 + 5`, cut to
/// 40% once compliance improves. Rows outside the business-unit selector are
/// left out when it names a known unit.
pub fn heatmap_cells(jitter: &Jitter, state: &ScenarioState) -> Vec<HeatCell> {
    let draws = jitter.unit_draws("t3-heatmap", CATEGORY_NAMES.len() * BUSINESS_UNITS.len());
    let factor = if state.is_after() { 0.4 } else { 1.0 };
    let filter_known = match &state.business_unit {
        Selector::All => false,
        selector => BUSINESS_UNITS.iter().any(|unit| selector.matches(unit)),
    };

    let mut cells = Vec::with_capacity(draws.len());
    for (i, _) in CATEGORY_NAMES.iter().enumerate() {
        for (j, unit) in BUSINESS_UNITS.iter().enumerate() {
            if filter_known && !state.business_unit.matches(unit) {
                continue;
            }
            let base = draws[i * BUSINESS_UNITS.len() + j] * 25.0 + 5.0;
            cells.push((i, j, round_to(base * factor, 1)));
        }
    }
    cells
}

pub struct MaverickHeatmap {
    jitter: Jitter,
}

impl MaverickHeatmap {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    fn data(&self, state: &ScenarioState) -> Value {
        heatmap_cells(&self.jitter, state)
            .into_iter()
            .map(|(i, j, value)| json!([i, j, value]))
            .collect()
    }
}

impl ChartSpec for MaverickHeatmap {
    fn options(&self, state: &ScenarioState) -> Value {
        with_common(json!({
            "tooltip": { "position": "top" },
            "grid": { "height": "50%", "top": "10%" },
            "xAxis": { "type": "category", "data": CATEGORY_NAMES, "splitArea": { "show": true } },
            "yAxis": { "type": "category", "data": BUSINESS_UNITS, "splitArea": { "show": true } },
            "visualMap": {
                "min": 0,
                "max": 30,
                "calculable": true,
                "orient": "horizontal",
                "left": "center",
                "bottom": "15%",
                "inRange": { "color": [GREEN, AMBER, RED] },
            },
            "series": [{
                "type": "heatmap",
                "data": self.data(state),
                "label": { "show": true, "formatter": "{c}%" },
                "emphasis": { "itemStyle": { "shadowBlur": 10, "shadowColor": "rgba(0, 0, 0, 0.5)" } },
            }],
        }))
    }

    fn update(&self, state: &ScenarioState) -> Value {
        json!({ "series": [{ "data": self.data(state) }] })
    }
}
