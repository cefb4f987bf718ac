//! t5: payment-terms distribution and working-capital impact.

use dashboard_core::views::ChartSpec;
use serde_json::{json, Value};
use shared::domain::ScenarioState;

use crate::palette::{with_common, AMBER, GREEN};

pub const TERMS_BINS: [&str; 7] = ["0-15", "16-30", "31-45", "46-60", "61-75", "76-90", "90+"];
pub const TERMS_BEFORE: [u32; 7] = [45, 89, 156, 78, 34, 18, 8];
pub const TERMS_AFTER: [u32; 7] = [12, 34, 89, 167, 98, 45, 23];

pub struct TermsHistogram;

impl ChartSpec for TermsHistogram {
    fn options(&self, _state: &ScenarioState) -> Value {
        with_common(json!({
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
            "legend": { "data": ["Before", "After"] },
            "xAxis": { "type": "category", "data": TERMS_BINS, "name": "Payment Terms (Days)" },
            "yAxis": { "type": "value", "name": "Number of Suppliers" },
            "series": [
                { "name": "Before", "type": "bar", "data": TERMS_BEFORE, "itemStyle": { "color": AMBER, "opacity": 0.7 } },
                { "name": "After", "type": "bar", "data": TERMS_AFTER, "itemStyle": { "color": GREEN, "opacity": 0.7 } },
            ],
        }))
    }

    fn update(&self, _state: &ScenarioState) -> Value {
        json!({ "series": [{ "data": TERMS_BEFORE }, { "data": TERMS_AFTER }] })
    }
}

pub const WATERFALL_STEPS: [&str; 5] = [
    "Baseline",
    "Terms Extension",
    "Discount Capture",
    "Penalty Reduction",
    "Final Impact",
];
pub const WATERFALL_VALUES: [f64; 5] = [45.2, 8.7, 3.2, 1.9, 58.9];

/// Positive bars green, everything else amber.
fn waterfall_data() -> Value {
    WATERFALL_VALUES
        .iter()
        .map(|value| {
            let color = if *value > 0.0 { GREEN } else { AMBER };
            json!({ "value": value, "itemStyle": { "color": color } })
        })
        .collect()
}

pub struct CapitalWaterfall;

impl ChartSpec for CapitalWaterfall {
    fn options(&self, _state: &ScenarioState) -> Value {
        with_common(json!({
            "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
            "xAxis": { "type": "category", "data": WATERFALL_STEPS },
            "yAxis": { "type": "value", "name": "Impact ($M)" },
            "series": [{ "type": "bar", "data": waterfall_data() }],
        }))
    }

    fn update(&self, _state: &ScenarioState) -> Value {
        json!({ "series": [{ "data": waterfall_data() }] })
    }
}
