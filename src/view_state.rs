use crate::application::QueryOutcome;
use crate::domain::{errors::GraphError, graph::SeriesBundle};

/// Фаза отображения виджета
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Данных для активного ключа ещё нет; показываем только загрузку.
    Loading,
    Ready,
    /// Последний запрос упал; старые данные остаются под баннером ошибки.
    Error,
}

/// Что сейчас показывает виджет
#[derive(Debug, Clone, PartialEq)]
pub struct GraphViewState {
    phase: ViewPhase,
    bundle: SeriesBundle,
    error: Option<GraphError>,
}

impl Default for GraphViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphViewState {
    pub fn new() -> Self {
        Self { phase: ViewPhase::Loading, bundle: SeriesBundle::default(), error: None }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn bundle(&self) -> &SeriesBundle {
        &self.bundle
    }

    pub fn error(&self) -> Option<&GraphError> {
        self.error.as_ref()
    }

    pub fn shows_chart(&self) -> bool {
        self.phase != ViewPhase::Loading
    }

    /// A new query key became active. A cached result is shown at once,
    /// otherwise the widget goes back to loading.
    pub fn key_changed(&mut self, cached: Option<SeriesBundle>) {
        self.error = None;
        match cached {
            Some(bundle) => {
                self.bundle = bundle;
                self.phase = ViewPhase::Ready;
            }
            None => self.phase = ViewPhase::Loading,
        }
    }

    pub fn apply(&mut self, outcome: QueryOutcome) {
        match outcome {
            QueryOutcome::Success(bundle) => {
                self.bundle = bundle;
                self.error = None;
                self.phase = ViewPhase::Ready;
            }
            QueryOutcome::Failed(error) => {
                self.error = Some(error);
                self.phase = ViewPhase::Error;
            }
            QueryOutcome::Superseded => {}
        }
    }
}
