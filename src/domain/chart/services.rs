use super::value_objects::*;
use crate::domain::graph::{MetricId, SeriesBundle};

const LINE_TENSION: f64 = 0.1;
const POINT_HOVER_RADIUS: f64 = 7.0;

/// 🎨 Порядок легенды и стиль каждой метрики. Относительные метрики на левой
/// оси, деньги и объёмы на правой.
pub const SERIES_STYLES: [(MetricId, SeriesStyle); 11] = [
    (MetricId::Twr, style("twr", "#e00505", AxisId::Ratio, false)),
    (MetricId::BtcProfit, style("btc", "#0552e0", AxisId::Ratio, false)),
    (MetricId::DrawDown, style("drawDown", "#a905e0", AxisId::Ratio, true)),
    (MetricId::DepositLoad, style("DepositLoad", "#e0bc05", AxisId::Ratio, true)),
    (MetricId::Balance, style("balance", "#54382f", AxisId::Currency, false)),
    (MetricId::MarginBalance, style("margin balance", "#33562f", AxisId::Currency, true)),
    (MetricId::Transfer, style("transfer", "#490b24", AxisId::Currency, true)),
    (MetricId::PnlByHour, style("PnlByHour", "#7aa85f", AxisId::Currency, true)),
    (MetricId::OpenVolume, style("OpenVolume", "#4517d7", AxisId::Currency, true)),
    (MetricId::OpenVolumeLong, style("OpenVolumeLong", "#140448", AxisId::Currency, true)),
    (MetricId::OpenVolumeShort, style("OpenVolumeShort", "#8e6dfc", AxisId::Currency, true)),
];

const fn style(label: &'static str, color: &'static str, axis: AxisId, hidden: bool) -> SeriesStyle {
    SeriesStyle { label, color, axis, hidden }
}

fn dataset(style: &SeriesStyle, data: &[f64]) -> Dataset {
    Dataset {
        label: style.label.to_string(),
        data: data.to_vec(),
        hidden: style.hidden,
        border_color: style.color.to_string(),
        background_color: style.color.to_string(),
        cubic_interpolation_mode: Interpolation::Monotone,
        tension: LINE_TENSION,
        y_axis_id: style.axis,
        point_style: "circle",
        point_radius: 0.0,
        point_hover_radius: POINT_HOVER_RADIUS,
    }
}

pub fn axis_options(axis: AxisId) -> AxisOptions {
    match axis {
        AxisId::Ratio => AxisOptions {
            kind: "linear",
            display: true,
            position: "left",
            begin_at_zero: true,
            grid: None,
        },
        // Сетку по всей области рисует только левая ось
        AxisId::Currency => AxisOptions {
            kind: "linear",
            display: true,
            position: "right",
            begin_at_zero: false,
            grid: Some(GridOptions { draw_on_chart_area: false }),
        },
    }
}

pub fn chart_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        interaction: InteractionOptions { mode: "index", intersect: false },
        elements: ElementOptions {
            point: PointOptions {
                radius: 0.0,
                hover_radius: POINT_HOVER_RADIUS,
                hit_radius: POINT_HOVER_RADIUS,
            },
            line: LineOptions { tension: LINE_TENSION },
        },
        plugins: PluginOptions {
            legend: LegendOptions { display: true, position: "top", align: "left", rtl: true },
            tooltip: TooltipOptions { enabled: true, position: "nearest" },
            title: TitleOptions { display: false },
        },
        scales: ScalesOptions {
            y: axis_options(AxisId::Ratio),
            y1: axis_options(AxisId::Currency),
        },
    }
}

/// Maps a bundle to renderer input: one dataset per metric in legend order.
/// Metrics missing from the bundle become empty datasets.
pub fn build_chart_input(bundle: &SeriesBundle) -> ChartInput {
    let datasets = SERIES_STYLES
        .iter()
        .map(|(metric, style)| dataset(style, bundle.series(*metric)))
        .collect();

    ChartInput {
        kind: "line",
        data: ChartData { labels: bundle.labels().to_vec(), datasets },
        options: chart_options(),
    }
}
