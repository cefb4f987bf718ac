//! t1: spend classification confidence and flow complexity.

use dashboard_core::{views::ChartSpec, MergeMode};
use serde_json::{json, Value};
use shared::domain::{Scenario, ScenarioState};

use crate::palette::{confidence_color, with_common, NEUTRAL, PRIMARY};

#[derive(Debug, Clone, PartialEq)]
pub struct TreemapCell {
    pub name: &'static str,
    pub value: f64,
    pub confidence: f64,
}

pub fn treemap_cells(scenario: Scenario) -> Vec<TreemapCell> {
    let after = scenario.is_after();
    let pick = |before: f64, improved: f64| if after { improved } else { before };
    let cell = |name, value, confidence| TreemapCell {
        name,
        value,
        confidence,
    };
    vec![
        cell("IT Services", 45.2, pick(65.0, 95.0)),
        cell("Professional Services", 38.7, pick(70.0, 98.0)),
        cell("Marketing", 22.4, pick(75.0, 92.0)),
        cell("Facilities", 18.9, pick(68.0, 96.0)),
        cell("Travel", 15.6, pick(85.0, 99.0)),
        cell("Office Supplies", 12.3, pick(72.0, 94.0)),
        cell("Miscellaneous", pick(18.7, 2.1), pick(25.0, 45.0)),
    ]
}

fn treemap_data(scenario: Scenario) -> Value {
    treemap_cells(scenario)
        .into_iter()
        .map(|cell| {
            json!({
                "name": cell.name,
                "value": cell.value,
                "confidence": cell.confidence,
                "itemStyle": { "color": confidence_color(cell.confidence) },
            })
        })
        .collect()
}

pub struct SpendTreemap;

impl ChartSpec for SpendTreemap {
    fn options(&self, state: &ScenarioState) -> Value {
        with_common(json!({
            "title": { "text": "", "left": "center", "textStyle": { "color": PRIMARY } },
            "tooltip": { "trigger": "item", "formatter": "{b}: ${c}M<br/>Confidence: {d}%" },
            "series": [{
                "type": "treemap",
                "data": treemap_data(state.scenario),
                "roam": false,
                "nodeClick": false,
                "breadcrumb": { "show": false },
                "label": { "show": true, "formatter": "{b}", "fontSize": 12 },
                "itemStyle": { "borderColor": "#fff", "borderWidth": 2, "gapWidth": 2 },
                "levels": [{ "itemStyle": { "borderColor": NEUTRAL, "borderWidth": 3, "gapWidth": 3 } }],
            }],
        }))
    }

    fn update(&self, state: &ScenarioState) -> Value {
        json!({ "series": [{ "type": "treemap", "data": treemap_data(state.scenario) }] })
    }

    fn merge_mode(&self) -> MergeMode {
        MergeMode::ReplaceSeries
    }
}

pub const SANKEY_NODES: [&str; 10] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "IT Services",
    "Professional Services",
    "Marketing",
    "IBM",
    "Microsoft",
    "Accenture",
    "McKinsey",
];

const SANKEY_LINKS: [(&str, &str, f64); 9] = [
    ("North America", "IT Services", 25.0),
    ("North America", "Professional Services", 20.0),
    ("Europe", "IT Services", 15.0),
    ("Europe", "Marketing", 12.0),
    ("Asia Pacific", "Professional Services", 10.0),
    ("IT Services", "IBM", 18.0),
    ("IT Services", "Microsoft", 22.0),
    ("Professional Services", "Accenture", 15.0),
    ("Professional Services", "McKinsey", 15.0),
];

/// Flow complexity shrinks once suppliers and categories are normalized.
pub fn sankey_complexity(scenario: Scenario) -> f64 {
    if scenario.is_after() {
        0.6
    } else {
        1.0
    }
}

pub fn sankey_links(scenario: Scenario) -> Vec<(&'static str, &'static str, f64)> {
    let factor = sankey_complexity(scenario);
    SANKEY_LINKS
        .iter()
        .map(|(source, target, value)| (*source, *target, value * factor))
        .collect()
}

fn sankey_series(scenario: Scenario) -> (Value, Value) {
    let nodes: Value = SANKEY_NODES.iter().map(|name| json!({ "name": name })).collect();
    let links: Value = sankey_links(scenario)
        .into_iter()
        .map(|(source, target, value)| json!({ "source": source, "target": target, "value": value }))
        .collect();
    (nodes, links)
}

pub struct SpendSankey;

impl ChartSpec for SpendSankey {
    fn options(&self, state: &ScenarioState) -> Value {
        let (nodes, links) = sankey_series(state.scenario);
        with_common(json!({
            "tooltip": { "trigger": "item", "triggerOn": "mousemove" },
            "series": [{
                "type": "sankey",
                "data": nodes,
                "links": links,
                "itemStyle": { "borderWidth": 1, "borderColor": "#aaa" },
                "lineStyle": { "color": "gradient", "curveness": 0.5 },
                "label": { "fontSize": 10 },
                "emphasis": { "focus": "adjacency" },
            }],
        }))
    }

    fn update(&self, state: &ScenarioState) -> Value {
        let (nodes, links) = sankey_series(state.scenario);
        json!({ "series": [{ "type": "sankey", "data": nodes, "links": links }] })
    }

    fn merge_mode(&self) -> MergeMode {
        MergeMode::ReplaceSeries
    }
}
