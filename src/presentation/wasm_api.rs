use gloo::utils::format::JsValueSerdeExt;
use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::StrategyGraph;
use crate::domain::{
    errors::{GraphError, GraphResult},
    logging::LogComponent,
};
use crate::infrastructure::ApiConfig;

/// `undefined`/`null` - настройки по умолчанию, иначе частичный camelCase объект.
pub fn config_from_js(value: &JsValue) -> GraphResult<ApiConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(ApiConfig::default());
    }
    let config: ApiConfig = value
        .into_serde()
        .map_err(|e| GraphError::Configuration(format!("Invalid config object: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// 🚀 Монтирует виджет графика стратегии в `<body>`
#[wasm_bindgen(js_name = mountStrategyGraph)]
pub fn mount_strategy_graph(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    crate::log_info!(
        LogComponent::Presentation("WASM"),
        "🚀 Mounting strategy graph for strategy {}",
        config.strategy_id
    );
    mount_to_body(move || view! { <StrategyGraph config=config /> });
    Ok(())
}
