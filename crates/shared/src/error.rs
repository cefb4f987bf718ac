use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load demo data. Please refresh the page.";
pub const CHART_FAILURE_MESSAGE: &str = "Chart failed to load";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    RenderFailed,
    Internal,
}

/// Message surfaced to the person looking at the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNotice {
    pub code: ErrorCode,
    pub message: String,
}

impl UserNotice {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn load_failure() -> Self {
        Self::new(ErrorCode::Internal, LOAD_FAILURE_MESSAGE)
    }

    pub fn chart_failure() -> Self {
        Self::new(ErrorCode::RenderFailed, CHART_FAILURE_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scenario '{raw}': expected 'before' or 'after'")]
pub struct ParseScenarioError {
    raw: String,
}

impl ParseScenarioError {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}
