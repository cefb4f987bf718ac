use serde_json::{json, Value};

pub const PRIMARY: &str = "#0d1b2a";
pub const GREEN: &str = "#2ca58d";
pub const AMBER: &str = "#f59e0b";
pub const RED: &str = "#d73027";
pub const NEUTRAL: &str = "#6c757d";

pub const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";

/// Confidence tiers: >= 90 green, >= 70 amber, otherwise red.
pub fn confidence_color(confidence: f64) -> &'static str {
    if confidence >= 90.0 {
        GREEN
    } else if confidence >= 70.0 {
        AMBER
    } else {
        RED
    }
}

/// Base options merged into every chart's initial configuration.
pub fn with_common(mut options: Value) -> Value {
    if let Some(map) = options.as_object_mut() {
        map.insert("animation".into(), json!(true));
        map.insert("animationDuration".into(), json!(300));
        map.insert("textStyle".into(), json!({ "fontFamily": FONT_FAMILY }));
    }
    options
}
