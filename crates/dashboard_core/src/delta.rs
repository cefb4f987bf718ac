//! Before/after delta indicators for KPI tiles.

use shared::domain::Scenario;

pub const DELTA_BASE_CLASS: &str = "kpi-delta";

/// `|(after - before) / before| * 100`, or `0` for a zero baseline.
pub fn percent_change(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        return 0.0;
    }
    ((after - before) / before * 100.0).abs()
}

/// When a metric's delta is styled as an improvement.
///
/// Each metric carries its own rule; some dashboards style "higher is
/// better" metrics as a regression once the improved scenario is active and
/// that mapping is kept as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImprovementRule {
    /// Improvement while `After` is active.
    WhenAfter,
    /// Improvement while `Before` is active.
    WhenBefore,
}

impl ImprovementRule {
    pub fn is_improvement(self, scenario: Scenario) -> bool {
        match self {
            Self::WhenAfter => scenario.is_after(),
            Self::WhenBefore => !scenario.is_after(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaStyle {
    Positive,
    Negative,
}

impl DeltaStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Derived per transition; never stored between scenario changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaDisplay {
    pub before: f64,
    pub after: f64,
    pub unit: String,
    pub improvement: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaText {
    pub text: String,
    pub class: String,
}

impl DeltaText {
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl DeltaDisplay {
    pub fn derive(
        before: f64,
        after: f64,
        unit: impl Into<String>,
        rule: ImprovementRule,
        scenario: Scenario,
    ) -> Self {
        Self {
            before,
            after,
            unit: unit.into(),
            improvement: rule.is_improvement(scenario),
        }
    }

    pub fn percent(&self) -> f64 {
        percent_change(self.before, self.after)
    }

    pub fn style(&self) -> DeltaStyle {
        if self.improvement {
            DeltaStyle::Positive
        } else {
            DeltaStyle::Negative
        }
    }

    /// Blank under `Before`; deltas only mean something against the baseline.
    pub fn render(&self, scenario: Scenario) -> DeltaText {
        if !scenario.is_after() {
            return DeltaText {
                text: String::new(),
                class: DELTA_BASE_CLASS.to_string(),
            };
        }
        DeltaText {
            text: format!("{:.0}% improvement", self.percent()),
            class: format!("{DELTA_BASE_CLASS} {}", self.style().class_name()),
        }
    }

    /// Raw movement with its unit, e.g. `487 -> 87 duplicates`.
    pub fn describe(&self) -> String {
        format!("{} -> {}{}", self.before, self.after, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_matches_formula() {
        assert!((percent_change(70.0, 98.0) - 40.0).abs() < 1e-9);
        assert_eq!(percent_change(487.0, 87.0), (400.0 / 487.0) * 100.0);
        assert_eq!(percent_change(-10.0, -5.0), 50.0);
    }

    #[test]
    fn zero_baseline_yields_zero_percent() {
        assert_eq!(percent_change(0.0, 5.2), 0.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
    }

    #[test]
    fn before_renders_blank_with_base_class() {
        let delta = DeltaDisplay::derive(22.0, 7.0, "%", ImprovementRule::WhenAfter, Scenario::Before);
        let text = delta.render(Scenario::Before);
        assert!(text.is_blank());
        assert_eq!(text.class, "kpi-delta");
    }

    #[test]
    fn after_renders_rounded_percent_and_style() {
        let delta = DeltaDisplay::derive(22.0, 7.0, "%", ImprovementRule::WhenAfter, Scenario::After);
        let text = delta.render(Scenario::After);
        assert_eq!(text.text, "68% improvement");
        assert_eq!(text.class, "kpi-delta positive");
    }

    #[test]
    fn when_before_rule_styles_after_as_negative() {
        let delta = DeltaDisplay::derive(76.0, 84.0, "%", ImprovementRule::WhenBefore, Scenario::After);
        let text = delta.render(Scenario::After);
        assert_eq!(text.text, "11% improvement");
        assert_eq!(text.class, "kpi-delta negative");
    }

    #[test]
    fn describe_includes_unit() {
        let delta =
            DeltaDisplay::derive(487.0, 87.0, " duplicates", ImprovementRule::WhenAfter, Scenario::After);
        assert_eq!(delta.describe(), "487 -> 87 duplicates");
    }
}
