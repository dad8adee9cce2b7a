//! Адаптеры браузера: HTTP источник данных, консольный логгер, мост к рендереру.

pub mod config;
pub mod dto;
pub mod http;
pub mod rendering;
pub mod services;

pub use config::ApiConfig;
pub use http::StrategyApiClient;
pub use rendering::{ChartRenderer, JsChartRenderer, render_if_attached};
