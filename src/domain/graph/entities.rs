use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// 📊 Метрики расширенного графика стратегии
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, EnumIter, EnumString,
    AsRefStr, Serialize, Deserialize,
)]
pub enum MetricId {
    #[strum(serialize = "twr")]
    #[serde(rename = "twr")]
    Twr,
    #[strum(serialize = "btcProfit")]
    #[serde(rename = "btcProfit")]
    BtcProfit,
    #[strum(serialize = "balance")]
    #[serde(rename = "balance")]
    Balance,
    #[strum(serialize = "marginBalance")]
    #[serde(rename = "marginBalance")]
    MarginBalance,
    #[strum(serialize = "transfer")]
    #[serde(rename = "transfer")]
    Transfer,
    #[strum(serialize = "PnlByHour")]
    #[serde(rename = "PnlByHour")]
    PnlByHour,
    #[strum(serialize = "drawDown")]
    #[serde(rename = "drawDown")]
    DrawDown,
    #[strum(serialize = "openVolume")]
    #[serde(rename = "openVolume")]
    OpenVolume,
    #[strum(serialize = "openVolumeLong")]
    #[serde(rename = "openVolumeLong")]
    OpenVolumeLong,
    #[strum(serialize = "openVolumeShort")]
    #[serde(rename = "openVolumeShort")]
    OpenVolumeShort,
    #[strum(serialize = "depositLoad")]
    #[serde(rename = "depositLoad")]
    DepositLoad,
}

impl MetricId {
    /// Сокращённое поле метрики в ответе API
    pub fn wire_field(&self) -> &'static str {
        match self {
            Self::Twr => "tw",
            Self::BtcProfit => "bp",
            Self::Balance => "b",
            Self::MarginBalance => "mb",
            Self::Transfer => "t",
            Self::PnlByHour => "pnh",
            Self::DrawDown => "dd",
            Self::OpenVolume => "op",
            Self::OpenVolumeLong => "opl",
            Self::OpenVolumeShort => "ops",
            Self::DepositLoad => "dl",
        }
    }

    pub fn from_wire_field(field: &str) -> Option<Self> {
        Self::iter().find(|metric| metric.wire_field() == field)
    }

    pub fn key(&self) -> &str {
        self.as_ref()
    }
}

/// Все серии одного запроса на общей оси меток
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesBundle {
    labels: Vec<String>,
    series: BTreeMap<MetricId, Vec<f64>>,
}

impl SeriesBundle {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, series: BTreeMap::new() }
    }

    /// Builder-style insert; replaces any previous data for `metric`.
    pub fn with_series(mut self, metric: MetricId, values: Vec<f64>) -> Self {
        self.series.insert(metric, values);
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Отсутствующая метрика читается как пустая серия
    pub fn series(&self, metric: MetricId) -> &[f64] {
        self.series.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.series.values().all(Vec::is_empty)
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    /// Non-empty series whose length differs from the label count.
    pub fn misaligned(&self) -> Vec<MetricId> {
        self.series
            .iter()
            .filter(|(_, values)| !values.is_empty() && values.len() != self.labels.len())
            .map(|(metric, _)| *metric)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_fields_are_unique_and_reversible() {
        let fields: HashSet<_> = MetricId::iter().map(|m| m.wire_field()).collect();
        assert_eq!(fields.len(), MetricId::iter().count());
        for metric in MetricId::iter() {
            assert_eq!(MetricId::from_wire_field(metric.wire_field()), Some(metric));
        }
        assert_eq!(MetricId::from_wire_field("l"), None);
    }

    #[test]
    fn missing_series_reads_empty() {
        let bundle = SeriesBundle::new(vec!["a".into()]).with_series(MetricId::Balance, vec![1.0]);
        assert_eq!(bundle.series(MetricId::Balance), &[1.0]);
        assert!(bundle.series(MetricId::Twr).is_empty());
        assert!(bundle.misaligned().is_empty());
    }

    #[test]
    fn reports_misaligned_series() {
        let bundle = SeriesBundle::new(vec!["a".into(), "b".into()])
            .with_series(MetricId::Twr, vec![1.0])
            .with_series(MetricId::Balance, vec![1.0, 2.0]);
        assert_eq!(bundle.misaligned(), vec![MetricId::Twr]);
    }
}
