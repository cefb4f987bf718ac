//! UI events understood by the headless driver and their script syntax.

use shared::{
    domain::{Scenario, Selector, ViewId},
    error::ParseScenarioError,
};
use thiserror::Error;

/// One line of a session script:
///
/// ```text
/// toggle on            # checked = After
/// scenario before
/// visible t1-treemap   # or `visible all`
/// resize
/// destroy t3-heatmap
/// business-unit Sales
/// region All
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Toggle(bool),
    Scenario(Scenario),
    Visible(ViewId),
    VisibleAll,
    Resize,
    Destroyed(ViewId),
    BusinessUnit(Selector),
    Region(Selector),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::Scenario(_) => "scenario",
            Self::Visible(_) => "visible",
            Self::VisibleAll => "visible_all",
            Self::Resize => "resize",
            Self::Destroyed(_) => "destroy",
            Self::BusinessUnit(_) => "business_unit",
            Self::Region(_) => "region",
        }
    }

    /// Parses one script line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, UiError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let required = |what: &'static str| {
            if rest.is_empty() {
                Err(UiError::MissingArgument {
                    command: command.to_string(),
                    what,
                })
            } else {
                Ok(rest)
            }
        };

        let event = match command.to_ascii_lowercase().as_str() {
            "toggle" => Self::Toggle(parse_toggle(required("on/off")?)?),
            "scenario" => Self::Scenario(required("scenario")?.parse::<Scenario>()?),
            "visible" => match required("element id")? {
                all if all.eq_ignore_ascii_case("all") => Self::VisibleAll,
                id => Self::Visible(ViewId::from(id)),
            },
            "resize" => Self::Resize,
            "destroy" => Self::Destroyed(ViewId::from(required("element id")?)),
            "business-unit" => Self::BusinessUnit(Selector::parse(rest)),
            "region" => Self::Region(Selector::parse(rest)),
            other => return Err(UiError::UnknownCommand(other.to_string())),
        };
        Ok(Some(event))
    }
}

fn parse_toggle(raw: &str) -> Result<bool, UiError> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "checked" | "1" => Ok(true),
        "off" | "false" | "unchecked" | "0" => Ok(false),
        _ => Err(UiError::InvalidToggle(raw.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' needs {what}")]
    MissingArgument { command: String, what: &'static str },
    #[error("toggle expects on/off, got '{0}'")]
    InvalidToggle(String),
    #[error(transparent)]
    Scenario(#[from] ParseScenarioError),
}
