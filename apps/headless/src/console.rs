//! Rendering collaborator that writes one line per call instead of drawing.

use std::{
    collections::{HashMap, HashSet},
    io::Write,
};

use dashboard_core::{ChartHandle, ChartRenderer, MergeMode, RenderError, TextSurface};
use serde_json::Value;
use shared::domain::ViewId;

pub struct ConsoleRenderer<W> {
    out: W,
    next_handle: u64,
    charts: HashMap<ChartHandle, ViewId>,
    missing: HashSet<ViewId>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_handle: 0,
            charts: HashMap::new(),
            missing: HashSet::new(),
        }
    }

    /// Treats `element` as absent from the page.
    pub fn omit(&mut self, element: impl Into<ViewId>) {
        self.missing.insert(element.into());
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), RenderError> {
        writeln!(self.out, "{line}").map_err(|err| RenderError::Backend(err.to_string()))
    }

    fn present(&self, element: &ViewId) -> Result<(), RenderError> {
        if self.missing.contains(element) {
            return Err(RenderError::MissingElement(element.to_string()));
        }
        Ok(())
    }

    fn chart(&self, handle: ChartHandle) -> Result<&ViewId, RenderError> {
        self.charts
            .get(&handle)
            .ok_or(RenderError::UnknownHandle(handle))
    }
}

fn merge_label(merge: MergeMode) -> &'static str {
    match merge {
        MergeMode::Normal => "merge",
        MergeMode::ReplaceSeries => "replace-series",
    }
}

impl<W: Write> ChartRenderer for ConsoleRenderer<W> {
    fn init(&mut self, element: &ViewId) -> Result<ChartHandle, RenderError> {
        self.present(element)?;
        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.charts.insert(handle, element.clone());
        tracing::debug!(view_id = %element, %handle, "chart initialized");
        self.emit(format_args!("init {element} {handle}"))?;
        Ok(handle)
    }

    fn set_option(
        &mut self,
        handle: ChartHandle,
        delta: Value,
        merge: MergeMode,
    ) -> Result<(), RenderError> {
        let element = self.chart(handle)?.clone();
        self.emit(format_args!("option {element} {} {delta}", merge_label(merge)))
    }

    fn resize(&mut self, handle: ChartHandle) -> Result<(), RenderError> {
        let element = self.chart(handle)?.clone();
        self.emit(format_args!("resize {element}"))
    }

    fn show_fallback(&mut self, element: &ViewId, message: &str) {
        if let Err(err) = self.emit(format_args!("fallback {element} \"{message}\"")) {
            tracing::warn!(view_id = %element, error = %err, "could not write fallback");
        }
    }
}

impl<W: Write> TextSurface for ConsoleRenderer<W> {
    fn set_text(&mut self, element: &ViewId, text: &str) -> Result<(), RenderError> {
        self.present(element)?;
        self.emit(format_args!("text {element} \"{text}\""))
    }

    fn set_class(&mut self, element: &ViewId, class: &str) -> Result<(), RenderError> {
        self.present(element)?;
        self.emit(format_args!("class {element} \"{class}\""))
    }
}
