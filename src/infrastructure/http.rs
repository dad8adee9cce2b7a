use crate::domain::{
    errors::{GraphError, GraphResult},
    graph::{GraphDataSource, QueryKey, SeriesBundle},
    logging::LogComponent,
};
use crate::infrastructure::{config::ApiConfig, dto::GraphExtendedDto};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use std::time::Duration;

const MAX_BACKOFF_MS: u64 = 30_000;

/// 🌐 HTTP клиент API стратегий на основе gloo
#[derive(Debug, Clone)]
pub struct StrategyApiClient {
    config: ApiConfig,
}

impl Default for StrategyApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl StrategyApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `{base}/strategy/{id}/graph-extended?scale=..&from=..&to=..`
    ///
    /// Пустые даты (невалидный ввод) отправляются как есть.
    pub fn graph_extended_url(&self, key: &QueryKey) -> String {
        format!(
            "{}/strategy/{}/graph-extended?scale={}&from={}&to={}",
            self.config.base_url.trim_end_matches('/'),
            HttpUtils::url_encode(key.strategy_id.value()),
            key.scale.as_param(),
            key.from,
            key.to
        )
    }

    /// Запрос с повторами при сетевых/HTTP ошибках
    pub async fn get_graph_extended(&self, key: &QueryKey) -> GraphResult<SeriesBundle> {
        let url = self.graph_extended_url(key);
        let mut attempt = 0;
        loop {
            match Self::fetch_once(&url).await {
                Err(error) if error.is_retryable() && attempt < self.config.max_retries => {
                    let delay = HttpUtils::backoff_ms(attempt);
                    crate::log_warn!(
                        LogComponent::Infrastructure("StrategyApi"),
                        "⚠️ {} (attempt {}), retrying in {} ms",
                        error,
                        attempt + 1,
                        delay
                    );
                    gloo_timers::future::sleep(Duration::from_millis(delay)).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn fetch_once(url: &str) -> GraphResult<SeriesBundle> {
        crate::log_debug!(LogComponent::Infrastructure("StrategyApi"), "🌐 GET: {}", url);

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GraphError::FetchFailed(format!("Request failed: {:?}", e)))?;

        if !response.ok() {
            return Err(GraphError::FetchFailed(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let dto = response
            .json::<GraphExtendedDto>()
            .await
            .map_err(|e| GraphError::Decode(format!("Failed to parse JSON: {:?}", e)))?;

        Ok(dto.into_bundle())
    }
}

impl GraphDataSource for StrategyApiClient {
    fn fetch_graph(&self, key: &QueryKey) -> LocalBoxFuture<'static, GraphResult<SeriesBundle>> {
        let client = self.clone();
        let key = key.clone();
        async move { client.get_graph_extended(&key).await }.boxed_local()
    }
}

/// Утилиты для построения запросов
pub struct HttpUtils;

impl HttpUtils {
    /// Percent-encodes everything outside the RFC 3986 unreserved set.
    pub fn url_encode(input: &str) -> String {
        let mut encoded = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    encoded.push(byte as char)
                }
                _ => encoded.push_str(&format!("%{:02X}", byte)),
            }
        }
        encoded
    }

    /// `min(1000 * 2^attempt, 30000)` milliseconds
    pub fn backoff_ms(attempt: u32) -> u64 {
        1000u64
            .saturating_mul(2u64.saturating_pow(attempt))
            .min(MAX_BACKOFF_MS)
    }
}
