use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumIter};

/// Ось Y, к которой привязан dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr, Serialize)]
pub enum AxisId {
    /// Доли и проценты (twr, btc, drawdown, deposit load), слева
    #[display(fmt = "y")]
    #[strum(serialize = "y")]
    #[serde(rename = "y")]
    Ratio,
    /// Суммы и объёмы, справа
    #[display(fmt = "y1")]
    #[strum(serialize = "y1")]
    #[serde(rename = "y1")]
    Currency,
}

/// Cubic interpolation mode of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Monotone,
}

/// Статичный стиль одной метрики
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub axis: AxisId,
    pub hidden: bool,
}

/// One line of the chart, in the renderer's dataset shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub hidden: bool,
    pub border_color: String,
    pub background_color: String,
    pub cubic_interpolation_mode: Interpolation,
    pub tension: f64,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: AxisId,
    pub point_style: &'static str,
    pub point_radius: f64,
    pub point_hover_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub display: bool,
    pub position: &'static str,
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalesOptions {
    pub y: AxisOptions,
    pub y1: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionOptions {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: &'static str,
    pub align: &'static str,
    pub rtl: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipOptions {
    pub enabled: bool,
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOptions {
    pub radius: f64,
    pub hover_radius: f64,
    pub hit_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOptions {
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementOptions {
    pub point: PointOptions,
    pub line: LineOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub interaction: InteractionOptions,
    pub elements: ElementOptions,
    pub plugins: PluginOptions,
    pub scales: ScalesOptions,
}

/// Полный декларативный вход внешнего рендерера
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartInput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartInput {
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }
}
