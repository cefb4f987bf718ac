use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseScenarioError;

/// Display mode of the whole dashboard: the baseline or the improved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    #[default]
    Before,
    After,
}

impl Scenario {
    /// Maps the toggle control: checked means `After`.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Self::After
        } else {
            Self::Before
        }
    }

    pub fn is_after(self) -> bool {
        self == Self::After
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(ParseScenarioError::new(raw)),
        }
    }
}

/// Free-form filter selector with an `All` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub const ALL_SENTINEL: &'static str = "All";

    /// Parses a control value; blank input and the sentinel both mean `All`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name.eq_ignore_ascii_case(candidate),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Only(name) => name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single page-wide state every registered view renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScenarioState {
    pub scenario: Scenario,
    pub business_unit: Selector,
    pub region: Selector,
}

impl ScenarioState {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            ..Self::default()
        }
    }

    pub fn is_after(&self) -> bool {
        self.scenario.is_after()
    }
}

/// Key of a view element, e.g. `t2-pareto` or `t1-duplicates-delta`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId(pub String);

impl ViewId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ViewId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_checked_maps_to_after() {
        assert_eq!(Scenario::from_toggle(true), Scenario::After);
        assert_eq!(Scenario::from_toggle(false), Scenario::Before);
    }

    #[test]
    fn parses_scenario_case_insensitively_and_rejects_unknown() {
        assert_eq!("After".parse::<Scenario>().expect("after"), Scenario::After);
        assert_eq!(" before ".parse::<Scenario>().expect("before"), Scenario::Before);
        let err = "during".parse::<Scenario>().expect_err("unknown scenario");
        assert_eq!(err.raw(), "during");
    }

    #[test]
    fn selector_sentinel_and_blank_mean_all() {
        assert_eq!(Selector::parse("All"), Selector::All);
        assert_eq!(Selector::parse("  "), Selector::All);
        assert_eq!(Selector::parse("EMEA"), Selector::Only("EMEA".into()));
        assert!(Selector::All.matches("Sales"));
        assert!(Selector::parse("sales").matches("Sales"));
        assert!(!Selector::parse("HR").matches("Sales"));
    }

    #[test]
    fn scenario_serializes_snake_case() {
        let raw = serde_json::to_string(&Scenario::After).expect("serialize");
        assert_eq!(raw, "\"after\"");
    }
}
