//! Seams to the external rendering collaborator: a chart library for the
//! chart elements and a text surface for KPI tiles.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use serde_json::Value;
use shared::domain::ViewId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

impl fmt::Display for ChartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an option delta combines with what the chart already shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    #[default]
    Normal,
    /// Series arrays in the delta replace existing series wholesale.
    ReplaceSeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no element '{0}' to attach a chart to")]
    MissingElement(String),
    #[error("unknown chart handle {0}")]
    UnknownHandle(ChartHandle),
    #[error("renderer failure: {0}")]
    Backend(String),
}

pub trait ChartRenderer {
    fn init(&mut self, element: &ViewId) -> Result<ChartHandle, RenderError>;
    fn set_option(
        &mut self,
        handle: ChartHandle,
        delta: Value,
        merge: MergeMode,
    ) -> Result<(), RenderError>;
    fn resize(&mut self, handle: ChartHandle) -> Result<(), RenderError>;
    /// Replaces the element's content with a static message.
    fn show_fallback(&mut self, element: &ViewId, message: &str);
}

pub trait TextSurface {
    fn set_text(&mut self, element: &ViewId, text: &str) -> Result<(), RenderError>;
    fn set_class(&mut self, element: &ViewId, class: &str) -> Result<(), RenderError>;
}

pub type SharedRenderer = Rc<RefCell<dyn ChartRenderer>>;
pub type SharedSurface = Rc<RefCell<dyn TextSurface>>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub handle: ChartHandle,
    pub delta: Value,
    pub merge: MergeMode,
}

/// In-memory collaborator that keeps every call it receives. A test stand-in
/// for the real chart library and page, like a passthrough backend.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_handle: u64,
    elements: HashMap<ChartHandle, ViewId>,
    failing: Vec<ViewId>,
    missing_text: Vec<ViewId>,
    calls: Vec<RecordedCall>,
    resizes: Vec<ChartHandle>,
    fallbacks: HashMap<ViewId, String>,
    texts: HashMap<ViewId, String>,
    classes: HashMap<ViewId, String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Makes `init` fail for the given element.
    pub fn fail_init_for(&mut self, element: impl Into<ViewId>) {
        self.failing.push(element.into());
    }

    /// Makes text and class writes to the given element fail as if it were
    /// absent from the page.
    pub fn fail_text_for(&mut self, element: impl Into<ViewId>) {
        self.missing_text.push(element.into());
    }

    fn text_target(&self, element: &ViewId) -> Result<(), RenderError> {
        if self.missing_text.contains(element) {
            return Err(RenderError::MissingElement(element.to_string()));
        }
        Ok(())
    }

    pub fn handle_for(&self, element: &ViewId) -> Option<ChartHandle> {
        self.elements
            .iter()
            .find(|(_, id)| *id == element)
            .map(|(handle, _)| *handle)
    }

    pub fn calls_for(&self, element: &ViewId) -> Vec<&RecordedCall> {
        let Some(handle) = self.handle_for(element) else {
            return Vec::new();
        };
        self.calls.iter().filter(|c| c.handle == handle).collect()
    }

    pub fn last_delta(&self, element: &ViewId) -> Option<&Value> {
        self.calls_for(element).last().map(|c| &c.delta)
    }

    pub fn resize_count(&self, element: &ViewId) -> usize {
        let Some(handle) = self.handle_for(element) else {
            return 0;
        };
        self.resizes.iter().filter(|h| **h == handle).count()
    }

    pub fn fallback(&self, element: &ViewId) -> Option<&str> {
        self.fallbacks.get(element).map(String::as_str)
    }

    pub fn text(&self, element: &ViewId) -> Option<&str> {
        self.texts.get(element).map(String::as_str)
    }

    pub fn class(&self, element: &ViewId) -> Option<&str> {
        self.classes.get(element).map(String::as_str)
    }

    pub fn attached_count(&self) -> usize {
        self.elements.len()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn init(&mut self, element: &ViewId) -> Result<ChartHandle, RenderError> {
        if self.failing.contains(element) {
            return Err(RenderError::Backend(format!("init refused for {element}")));
        }
        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.elements.insert(handle, element.clone());
        Ok(handle)
    }

    fn set_option(
        &mut self,
        handle: ChartHandle,
        delta: Value,
        merge: MergeMode,
    ) -> Result<(), RenderError> {
        if !self.elements.contains_key(&handle) {
            return Err(RenderError::UnknownHandle(handle));
        }
        self.calls.push(RecordedCall {
            handle,
            delta,
            merge,
        });
        Ok(())
    }

    fn resize(&mut self, handle: ChartHandle) -> Result<(), RenderError> {
        if !self.elements.contains_key(&handle) {
            return Err(RenderError::UnknownHandle(handle));
        }
        self.resizes.push(handle);
        Ok(())
    }

    fn show_fallback(&mut self, element: &ViewId, message: &str) {
        self.fallbacks.insert(element.clone(), message.to_string());
    }
}

impl TextSurface for RecordingRenderer {
    fn set_text(&mut self, element: &ViewId, text: &str) -> Result<(), RenderError> {
        self.text_target(element)?;
        self.texts.insert(element.clone(), text.to_string());
        Ok(())
    }

    fn set_class(&mut self, element: &ViewId, class: &str) -> Result<(), RenderError> {
        self.text_target(element)?;
        self.classes.insert(element.clone(), class.to_string());
        Ok(())
    }
}
