use crate::application::query_cache::{DEFAULT_CACHE_CAPACITY, QueryCache};
use crate::domain::{
    errors::GraphError,
    graph::{GraphDataSource, QueryKey, SeriesBundle},
    logging::{LogComponent, LogLevel, get_logger},
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::rc::Rc;

/// Результат одного `load` с точки зрения view
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Success(SeriesBundle),
    Failed(GraphError),
    /// Пока шёл запрос, активным стал новый ключ; значение отбрасываем.
    Superseded,
}

/// 📡 Загрузка графика стратегии: кэш, один запрос на ключ,
/// во view попадает только последний ключ.
pub struct GraphQueryUseCase<S: GraphDataSource> {
    source: Rc<S>,
    cache: QueryCache<QueryKey, SeriesBundle, GraphError>,
    active_key: Rc<RefCell<Option<QueryKey>>>,
}

impl<S: GraphDataSource> Clone for GraphQueryUseCase<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            cache: self.cache.clone(),
            active_key: Rc::clone(&self.active_key),
        }
    }
}

impl<S: GraphDataSource + 'static> GraphQueryUseCase<S> {
    pub fn new(source: Rc<S>) -> Self {
        Self::with_capacity(source, DEFAULT_CACHE_CAPACITY)
    }

    /// Keeps at most `capacity` loaded graphs; older ones are refetched on demand.
    pub fn with_capacity(source: Rc<S>, capacity: usize) -> Self {
        Self {
            source,
            cache: QueryCache::with_capacity(capacity),
            active_key: Rc::new(RefCell::new(None)),
        }
    }

    pub fn active_key(&self) -> Option<QueryKey> {
        self.active_key.borrow().clone()
    }

    pub fn cached(&self, key: &QueryKey) -> Option<SeriesBundle> {
        self.cache.peek(key)
    }

    pub fn is_pending(&self, key: &QueryKey) -> bool {
        self.cache.is_in_flight(key)
    }

    /// Делает `key` активным и загружает его
    pub fn load(&self, key: QueryKey) -> LocalBoxFuture<'static, QueryOutcome> {
        *self.active_key.borrow_mut() = Some(key.clone());

        let request = self.cache.fetch(key.clone(), || {
            crate::log_debug!(
                LogComponent::Application("GraphQuery"),
                "📡 Fetching graph {} ({} entries, {} in flight)",
                key,
                self.cache.len(),
                self.cache.in_flight()
            );
            self.source.fetch_graph(&key)
        });
        let active_key = Rc::clone(&self.active_key);

        async move {
            let result = request.await;

            if active_key.borrow().as_ref() != Some(&key) {
                crate::log_debug!(
                    LogComponent::Application("GraphQuery"),
                    "Discarding result for superseded key {}",
                    key
                );
                return QueryOutcome::Superseded;
            }

            match result {
                Ok(bundle) => {
                    let misaligned = bundle.misaligned();
                    if !misaligned.is_empty() {
                        get_logger().log_with_metadata(
                            LogLevel::Warn,
                            LogComponent::Application("GraphQuery"),
                            &format!("Series length differs from {} labels", bundle.point_count()),
                            &misaligned.iter().map(|m| m.key()).collect::<Vec<_>>().join(","),
                        );
                    }
                    crate::log_info!(
                        LogComponent::Application("GraphQuery"),
                        "✅ Graph {} loaded: {} points",
                        key,
                        bundle.point_count()
                    );
                    QueryOutcome::Success(bundle)
                }
                Err(error) => {
                    crate::log_error!(
                        LogComponent::Application("GraphQuery"),
                        "❌ Graph {} failed: {}",
                        key,
                        error
                    );
                    QueryOutcome::Failed(error)
                }
            }
        }
        .boxed_local()
    }
}
