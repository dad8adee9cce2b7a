use std::fmt::{Display, Formatter, Result as FmtResult};

/// ❌ Ошибки виджета графика
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Сетевая ошибка или неуспешный HTTP статус
    FetchFailed(String),
    /// Ответ пришёл, но это не график
    Decode(String),
    /// Внешний рендерер отклонил вход
    Render(String),
    Configuration(String),
}

impl GraphError {
    /// Короткий тег в баннере ошибки
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::FetchFailed(_) => "fetch",
            GraphError::Decode(_) => "decode",
            GraphError::Render(_) => "render",
            GraphError::Configuration(_) => "config",
        }
    }

    /// Имеет ли смысл повторить запрос
    pub fn is_retryable(&self) -> bool {
        matches!(self, GraphError::FetchFailed(_))
    }
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GraphError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            GraphError::Decode(msg) => write!(f, "Invalid graph payload: {}", msg),
            GraphError::Render(msg) => write!(f, "Chart rendering failed: {}", msg),
            GraphError::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;
