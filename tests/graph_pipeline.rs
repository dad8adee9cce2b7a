use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture, join};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use strategy_graph_wasm::application::{GraphQueryUseCase, QueryOutcome};
use strategy_graph_wasm::domain::errors::{GraphError, GraphResult};
use strategy_graph_wasm::domain::graph::{
    CalendarDate, GraphDataSource, GraphParams, MetricId, QueryKey, SeriesBundle, StrategyId,
};
use strategy_graph_wasm::view_state::{GraphViewState, ViewPhase};

/// Data source whose requests stay pending until the test resolves them.
#[derive(Default)]
struct ScriptedSource {
    calls: RefCell<Vec<QueryKey>>,
    pending: RefCell<HashMap<QueryKey, oneshot::Sender<GraphResult<SeriesBundle>>>>,
}

impl ScriptedSource {
    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn resolve(&self, key: &QueryKey, result: GraphResult<SeriesBundle>) {
        let sender = self.pending.borrow_mut().remove(key).expect("no pending request for key");
        sender.send(result).expect("request dropped");
    }
}

impl GraphDataSource for ScriptedSource {
    fn fetch_graph(&self, key: &QueryKey) -> LocalBoxFuture<'static, GraphResult<SeriesBundle>> {
        self.calls.borrow_mut().push(key.clone());
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(key.clone(), tx);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(GraphError::FetchFailed("request dropped".to_string())))
        }
        .boxed_local()
    }
}

fn setup() -> (Rc<ScriptedSource>, GraphQueryUseCase<ScriptedSource>, GraphParams) {
    let source = Rc::new(ScriptedSource::default());
    let use_case = GraphQueryUseCase::new(Rc::clone(&source));
    let params = GraphParams::starting_at(StrategyId::default(), CalendarDate::from_ymd(2024, 3, 7), 5);
    (source, use_case, params)
}

fn bundle(value: f64) -> SeriesBundle {
    SeriesBundle::new(vec!["t0".into()]).with_series(MetricId::Balance, vec![value])
}

#[test]
fn same_key_is_fetched_once() {
    let (source, use_case, params) = setup();
    let key = params.query_key();

    let first = use_case.load(key.clone());
    let second = use_case.load(key.clone());
    assert_eq!(source.call_count(), 1);
    assert!(use_case.is_pending(&key));

    source.resolve(&key, Ok(bundle(1.0)));
    let (a, b) = block_on(join(first, second));
    assert_eq!(a, QueryOutcome::Success(bundle(1.0)));
    assert_eq!(b, QueryOutcome::Success(bundle(1.0)));

    // Served from cache afterwards
    assert_eq!(block_on(use_case.load(key.clone())), QueryOutcome::Success(bundle(1.0)));
    assert_eq!(source.call_count(), 1);
}

#[test]
fn stale_key_result_is_superseded() {
    let (source, use_case, mut params) = setup();
    let day_key = params.query_key();
    let day = use_case.load(day_key.clone());

    params.select_hour();
    let hour_key = params.query_key();
    let hour = use_case.load(hour_key.clone());
    assert_eq!(source.call_count(), 2);

    // The older request resolves last
    source.resolve(&hour_key, Ok(bundle(2.0)));
    source.resolve(&day_key, Ok(bundle(1.0)));

    assert_eq!(block_on(hour), QueryOutcome::Success(bundle(2.0)));
    assert_eq!(block_on(day), QueryOutcome::Superseded);
    assert_eq!(use_case.active_key(), Some(hour_key));
    assert_eq!(use_case.cached(&day_key), Some(bundle(1.0)));
}

#[test]
fn failures_surface_and_are_refetched() {
    let (source, use_case, params) = setup();
    let key = params.query_key();

    let failed = use_case.load(key.clone());
    source.resolve(&key, Err(GraphError::FetchFailed("HTTP error: 503".to_string())));
    assert_eq!(
        block_on(failed),
        QueryOutcome::Failed(GraphError::FetchFailed("HTTP error: 503".to_string()))
    );
    assert_eq!(use_case.cached(&key), None);

    let retry = use_case.load(key.clone());
    assert_eq!(source.call_count(), 2);
    source.resolve(&key, Ok(bundle(3.0)));
    assert_eq!(block_on(retry), QueryOutcome::Success(bundle(3.0)));
}

#[test]
fn view_follows_loading_ready_error() {
    let (source, use_case, mut params) = setup();
    let mut view = GraphViewState::new();

    let first_key = params.query_key();
    view.key_changed(use_case.cached(&first_key));
    let pending = use_case.load(first_key.clone());
    assert_eq!(view.phase(), ViewPhase::Loading);
    assert!(!view.shows_chart());

    source.resolve(&first_key, Ok(bundle(1.0)));
    view.apply(block_on(pending));
    assert_eq!(view.phase(), ViewPhase::Ready);

    params.select_month();
    let month_key = params.query_key();
    view.key_changed(use_case.cached(&month_key));
    assert_eq!(view.phase(), ViewPhase::Loading);
    let pending = use_case.load(month_key.clone());
    source.resolve(&month_key, Err(GraphError::FetchFailed("timeout".to_string())));
    view.apply(block_on(pending));
    assert_eq!(view.phase(), ViewPhase::Error);
    assert_eq!(view.bundle(), &bundle(1.0));

    // Back to the first key: cached, no loading and no new request
    params.select_day();
    view.key_changed(use_case.cached(&params.query_key()));
    assert_eq!(view.phase(), ViewPhase::Ready);
    assert!(view.error().is_none());
    assert_eq!(source.call_count(), 2);
}

#[test]
fn evicted_graph_is_fetched_again() {
    let source = Rc::new(ScriptedSource::default());
    let use_case = GraphQueryUseCase::with_capacity(Rc::clone(&source), 1);
    let mut params = GraphParams::starting_at(StrategyId::default(), CalendarDate::from_ymd(2024, 3, 7), 5);

    let day_key = params.query_key();
    let day = use_case.load(day_key.clone());
    source.resolve(&day_key, Ok(bundle(1.0)));
    block_on(day);

    params.select_week();
    let week_key = params.query_key();
    let week = use_case.load(week_key.clone());
    source.resolve(&week_key, Ok(bundle(2.0)));
    block_on(week);

    assert_eq!(use_case.cached(&week_key), Some(bundle(2.0)));
    assert_eq!(use_case.cached(&day_key), None);

    let again = use_case.load(day_key.clone());
    assert_eq!(source.call_count(), 3);
    source.resolve(&day_key, Ok(bundle(1.5)));
    assert_eq!(block_on(again), QueryOutcome::Success(bundle(1.5)));
}
