use crate::domain::graph::{MetricId, SeriesBundle};
use serde::{Deserialize, Deserializer};

/// DTO ответа graph-extended. Имена полей на проводе сокращены;
/// отсутствующие или `null` массивы читаются как пустые.
#[derive(Debug, Default, Deserialize)]
pub struct GraphExtendedDto {
    #[serde(rename = "l", default, deserialize_with = "labels")]
    pub labels: Vec<String>,
    #[serde(rename = "bp", default, deserialize_with = "values")]
    pub btc_profit: Vec<f64>,
    #[serde(rename = "mb", default, deserialize_with = "values")]
    pub margin_balance: Vec<f64>,
    #[serde(rename = "b", default, deserialize_with = "values")]
    pub balance: Vec<f64>,
    #[serde(rename = "t", default, deserialize_with = "values")]
    pub transfer: Vec<f64>,
    #[serde(rename = "tw", default, deserialize_with = "values")]
    pub twr: Vec<f64>,
    #[serde(rename = "pnh", default, deserialize_with = "values")]
    pub pnl_by_hour: Vec<f64>,
    #[serde(rename = "dd", default, deserialize_with = "values")]
    pub draw_down: Vec<f64>,
    #[serde(rename = "op", default, deserialize_with = "values")]
    pub open_volume: Vec<f64>,
    #[serde(rename = "opl", default, deserialize_with = "values")]
    pub open_volume_long: Vec<f64>,
    #[serde(rename = "ops", default, deserialize_with = "values")]
    pub open_volume_short: Vec<f64>,
    #[serde(rename = "dl", default, deserialize_with = "values")]
    pub deposit_load: Vec<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Text(String),
    Number(serde_json::Number),
}

fn labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<Vec<RawLabel>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|label| match label {
            RawLabel::Text(text) => text,
            RawLabel::Number(number) => number.to_string(),
        })
        .collect())
}

/// `null` точки становятся NaN, рендерер получает их обратно как `null` (разрыв линии).
fn values<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let raw: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}

impl GraphExtendedDto {
    /// Конвертирует DTO в доменный SeriesBundle
    pub fn into_bundle(self) -> SeriesBundle {
        SeriesBundle::new(self.labels)
            .with_series(MetricId::BtcProfit, self.btc_profit)
            .with_series(MetricId::MarginBalance, self.margin_balance)
            .with_series(MetricId::Balance, self.balance)
            .with_series(MetricId::Transfer, self.transfer)
            .with_series(MetricId::Twr, self.twr)
            .with_series(MetricId::PnlByHour, self.pnl_by_hour)
            .with_series(MetricId::DrawDown, self.draw_down)
            .with_series(MetricId::OpenVolume, self.open_volume)
            .with_series(MetricId::OpenVolumeLong, self.open_volume_long)
            .with_series(MetricId::OpenVolumeShort, self.open_volume_short)
            .with_series(MetricId::DepositLoad, self.deposit_load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_abbreviated_fields() {
        let dto: GraphExtendedDto = serde_json::from_str(
            r#"{"l":["2024-01-01",1704153600],"bp":[1,2],"b":[10,20],"dl":[0.5,0.25],"tw":null}"#,
        )
        .unwrap();
        let bundle = dto.into_bundle();
        assert_eq!(bundle.labels(), &["2024-01-01".to_string(), "1704153600".to_string()]);
        assert_eq!(bundle.series(MetricId::BtcProfit), &[1.0, 2.0]);
        assert_eq!(bundle.series(MetricId::Balance), &[10.0, 20.0]);
        assert_eq!(bundle.series(MetricId::DepositLoad), &[0.5, 0.25]);
        assert!(bundle.series(MetricId::Twr).is_empty());
        assert!(bundle.series(MetricId::OpenVolumeShort).is_empty());
    }

    #[test]
    fn null_points_become_gaps() {
        let dto: GraphExtendedDto = serde_json::from_str(r#"{"l":["a","b"],"mb":[1.5,null]}"#).unwrap();
        let bundle = dto.into_bundle();
        let margin = bundle.series(MetricId::MarginBalance);
        assert_eq!(margin[0], 1.5);
        assert!(margin[1].is_nan());
    }

    #[test]
    fn empty_object_is_empty_bundle() {
        let dto: GraphExtendedDto = serde_json::from_str("{}").unwrap();
        assert!(dto.into_bundle().is_empty());
    }
}
