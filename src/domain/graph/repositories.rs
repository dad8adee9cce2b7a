use super::{entities::SeriesBundle, value_objects::QueryKey};
use crate::domain::errors::GraphResult;
use futures::future::LocalBoxFuture;
use std::rc::Rc;

/// Удалённый источник графиков стратегии.
///
/// Futures `!Send`: всё выполняется в event loop браузера.
pub trait GraphDataSource {
    fn fetch_graph(&self, key: &QueryKey) -> LocalBoxFuture<'static, GraphResult<SeriesBundle>>;
}

impl<T: GraphDataSource + ?Sized> GraphDataSource for Rc<T> {
    fn fetch_graph(&self, key: &QueryKey) -> LocalBoxFuture<'static, GraphResult<SeriesBundle>> {
        (**self).fetch_graph(key)
    }
}
