use crate::application::DEFAULT_CACHE_CAPACITY;
use crate::domain::{
    errors::{GraphError, GraphResult},
    graph::{DEFAULT_LOOKBACK_YEARS, MAX_LOOKBACK_YEARS, StrategyId},
};
use serde::Deserialize;

/// Настройки виджета. Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    /// Корень API стратегий, например `https://host/api`
    pub base_url: String,
    pub strategy_id: StrategyId,
    /// Глубина интервала по умолчанию, в годах
    pub lookback_years: u32,
    /// Дополнительные попытки после неудачного запроса
    pub max_retries: u32,
    pub canvas_id: String,
    /// Сколько загруженных графиков держать в кэше
    pub cache_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            strategy_id: StrategyId::default(),
            lookback_years: DEFAULT_LOOKBACK_YEARS,
            max_retries: 3,
            canvas_id: "strategy-graph-canvas".to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(GraphError::Configuration("baseUrl must not be empty".to_string()));
        }
        if self.canvas_id.trim().is_empty() {
            return Err(GraphError::Configuration("canvasId must not be empty".to_string()));
        }
        if self.lookback_years > MAX_LOOKBACK_YEARS {
            return Err(GraphError::Configuration(format!(
                "lookbackYears must be at most {}, got {}",
                MAX_LOOKBACK_YEARS, self.lookback_years
            )));
        }
        if self.cache_capacity == 0 {
            return Err(GraphError::Configuration("cacheCapacity must be positive".to_string()));
        }
        Ok(())
    }

    /// Парсинг (возможно частичного) JSON; отсутствующие поля берутся по умолчанию.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GraphError::Configuration(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
