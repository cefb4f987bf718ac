//! t4: unit-price spread per spec category and a monthly control chart.

use dashboard_core::{series::round_to, views::ChartSpec};
use serde_json::{json, Value};
use shared::domain::{Scenario, ScenarioState};

use crate::{
    jitter::Jitter,
    palette::{with_common, AMBER, GREEN, PRIMARY},
};

pub const SPEC_CATEGORIES: [&str; 5] = [
    "Laptops",
    "Office Chairs",
    "Software Licenses",
    "Consulting Services",
    "Marketing Materials",
];

/// Reference price followed by lower, Q1, median, Q3, upper.
const BOX_ROWS: [[f64; 6]; 5] = [
    [1200.0, 1180.0, 1250.0, 1300.0, 1380.0, 1420.0],
    [800.0, 780.0, 820.0, 850.0, 890.0, 920.0],
    [150.0, 140.0, 160.0, 175.0, 190.0, 210.0],
    [200.0, 180.0, 210.0, 225.0, 240.0, 260.0],
    [50.0, 45.0, 52.0, 58.0, 65.0, 72.0],
];

pub fn price_spread_factor(scenario: Scenario) -> f64 {
    if scenario.is_after() {
        0.4
    } else {
        1.0
    }
}

/// The reference price stays put; the five quantiles scale with the spread.
pub fn boxplot_rows(scenario: Scenario) -> Vec<[f64; 6]> {
    let factor = price_spread_factor(scenario);
    BOX_ROWS
        .iter()
        .map(|row| {
            let mut scaled = *row;
            for value in scaled.iter_mut().skip(1) {
                *value *= factor;
            }
            scaled
        })
        .collect()
}

fn boxplot_color(scenario: Scenario) -> &'static str {
    if scenario.is_after() {
        GREEN
    } else {
        AMBER
    }
}

pub struct PriceBoxplot;

impl ChartSpec for PriceBoxplot {
    fn options(&self, state: &ScenarioState) -> Value {
        with_common(json!({
            "grid": { "left": "10%", "right": "10%", "bottom": "15%" },
            "xAxis": {
                "type": "category",
                "data": SPEC_CATEGORIES,
                "boundaryGap": true,
                "nameGap": 30,
                "splitArea": { "show": false },
                "axisLabel": { "formatter": "{value}" },
            },
            "yAxis": { "type": "value", "name": "Unit Price ($)", "splitArea": { "show": true } },
            "series": [{
                "name": "boxplot",
                "type": "boxplot",
                "data": boxplot_rows(state.scenario),
                "itemStyle": { "color": boxplot_color(state.scenario) },
            }],
        }))
    }

    fn update(&self, state: &ScenarioState) -> Value {
        json!({
            "series": [{
                "data": boxplot_rows(state.scenario),
                "itemStyle": { "color": boxplot_color(state.scenario) },
            }]
        })
    }
}

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHLY_BASE: [f64; 12] = [
    125.0, 130.0, 135.0, 128.0, 142.0, 138.0, 145.0, 132.0, 129.0, 126.0, 124.0, 127.0,
];

pub const TARGET_PRICE: f64 = 130.0;
pub const UPPER_CONTROL: f64 = 145.0;
pub const LOWER_CONTROL: f64 = 115.0;

/// Monthly unit price: the raw series swings +-12.5 around its base; after
/// standardization it holds within +-4 of target.
pub fn control_series(jitter: &Jitter, scenario: Scenario) -> Vec<f64> {
    let draws = jitter.unit_draws("t4-controlChart", MONTHLY_BASE.len());
    MONTHLY_BASE
        .iter()
        .zip(draws)
        .map(|(base, draw)| {
            let value = if scenario.is_after() {
                TARGET_PRICE + (draw - 0.5) * 8.0
            } else {
                base + (draw - 0.5) * 25.0
            };
            round_to(value, 2)
        })
        .collect()
}

pub struct PriceControlChart {
    jitter: Jitter,
}

impl PriceControlChart {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    fn series(&self, scenario: Scenario) -> Value {
        let flat = |level: f64| vec![level; MONTHS.len()];
        json!([
            { "data": control_series(&self.jitter, scenario) },
            { "data": flat(TARGET_PRICE) },
            { "data": flat(UPPER_CONTROL) },
            { "data": flat(LOWER_CONTROL) },
        ])
    }
}

impl ChartSpec for PriceControlChart {
    fn options(&self, state: &ScenarioState) -> Value {
        let mut options = json!({
            "tooltip": { "trigger": "axis" },
            "legend": { "data": ["Unit Price", "Target", "Upper Control", "Lower Control"] },
            "xAxis": { "type": "category", "data": MONTHS },
            "yAxis": { "type": "value", "name": "Unit Price ($)" },
            "series": [
                { "name": "Unit Price", "type": "line", "itemStyle": { "color": PRIMARY }, "lineStyle": { "width": 2 } },
                { "name": "Target", "type": "line", "itemStyle": { "color": GREEN }, "lineStyle": { "type": "dashed" } },
                { "name": "Upper Control", "type": "line", "itemStyle": { "color": AMBER }, "lineStyle": { "type": "dotted" } },
                { "name": "Lower Control", "type": "line", "itemStyle": { "color": AMBER }, "lineStyle": { "type": "dotted" } },
            ],
        });
        let data = self.series(state.scenario);
        if let (Some(series), Some(data)) = (options["series"].as_array_mut(), data.as_array()) {
            for (entry, update) in series.iter_mut().zip(data) {
                entry["data"] = update["data"].clone();
            }
        }
        with_common(options)
    }

    fn update(&self, state: &ScenarioState) -> Value {
        json!({ "series": self.series(state.scenario) })
    }
}
