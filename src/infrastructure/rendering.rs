use crate::domain::{
    chart::ChartInput,
    errors::{GraphError, GraphResult},
    logging::LogComponent,
};
use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Рендерер линейного графика со страницы (формат конфигурации Chart.js).
    #[wasm_bindgen(catch, js_name = renderLineChart)]
    fn render_line_chart(canvas_id: &str, config: JsValue) -> Result<(), JsValue>;
}

/// Рисует декларативный вход графика
pub trait ChartRenderer {
    fn render(&self, input: &ChartInput) -> GraphResult<()>;
}

/// Hands the chart input to `window.renderLineChart(canvasId, config)`.
#[derive(Debug, Clone)]
pub struct JsChartRenderer {
    canvas_id: String,
}

impl JsChartRenderer {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into() }
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}

impl ChartRenderer for JsChartRenderer {
    fn render(&self, input: &ChartInput) -> GraphResult<()> {
        let config = JsValue::from_serde(input)
            .map_err(|e| GraphError::Render(format!("Failed to serialize chart input: {}", e)))?;

        render_line_chart(&self.canvas_id, config)
            .map_err(|e| GraphError::Render(format!("renderLineChart threw: {:?}", e)))?;

        crate::log_debug!(
            LogComponent::Infrastructure("ChartRenderer"),
            "🎨 Rendered {} datasets x {} labels on #{}",
            input.data.datasets.len(),
            input.data.labels.len(),
            self.canvas_id
        );
        Ok(())
    }
}

/// Рисует только в canvas, уже вставленный в документ. `Ok(false)` значит
/// пропуск: элемент ещё не смонтирован или уже отсоединён.
pub fn render_if_attached<R: ChartRenderer>(
    renderer: &R,
    attached: bool,
    input: &ChartInput,
) -> GraphResult<bool> {
    if !attached {
        crate::log_debug!(
            LogComponent::Infrastructure("ChartRenderer"),
            "Canvas not attached yet, skipping render"
        );
        return Ok(false);
    }
    renderer.render(input)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::build_chart_input;
    use crate::domain::graph::SeriesBundle;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingRenderer {
        calls: Cell<u32>,
    }

    impl ChartRenderer for CountingRenderer {
        fn render(&self, _input: &ChartInput) -> GraphResult<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn detached_canvas_is_skipped() {
        let renderer = CountingRenderer::default();
        let input = build_chart_input(&SeriesBundle::default());

        assert_eq!(render_if_attached(&renderer, false, &input), Ok(false));
        assert_eq!(renderer.calls.get(), 0);

        assert_eq!(render_if_attached(&renderer, true, &input), Ok(true));
        assert_eq!(renderer.calls.get(), 1);
    }
}
