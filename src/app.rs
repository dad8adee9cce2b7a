use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::GraphQueryUseCase,
    domain::{
        chart::build_chart_input,
        graph::GraphParams,
        logging::LogComponent,
    },
    infrastructure::{ApiConfig, JsChartRenderer, StrategyApiClient, render_if_attached},
    presentation::controls::{RangeEnd, change_range_end, input_value, scale_links, select_scale},
    time_utils,
    view_state::GraphViewState,
};

const STYLES: &str = r#"
.strategy-graph { position: relative; font-family: -apple-system, BlinkMacSystemFont, sans-serif; }
.graph-controls { display: flex; align-items: center; gap: 12px; margin-bottom: 10px; }
.scale-link { color: #4a5d73; text-decoration: none; cursor: pointer; padding: 2px 6px; border-radius: 4px; }
.scale-link.active { color: white; background: #4a5d73; }
.date-range input { font-size: 13px; }
.graph-error { padding: 8px 12px; margin-bottom: 8px; background: #ffeeee; border: 1px solid #ff0000; border-radius: 5px; }
.graph-loading { text-align: center; padding: 40px; color: #a0a0a0; }
"#;

/// 📈 График доходности стратегии: масштаб, интервал дат и линейный график
#[component]
pub fn StrategyGraph(config: ApiConfig) -> impl IntoView {
    let params = create_rw_signal(GraphParams::starting_at(
        config.strategy_id.clone(),
        time_utils::today(),
        config.lookback_years,
    ));
    let view_state = create_rw_signal(GraphViewState::new());
    let use_case = GraphQueryUseCase::with_capacity(
        Rc::new(StrategyApiClient::new(config.clone())),
        config.cache_capacity,
    );
    let renderer = JsChartRenderer::new(config.canvas_id.clone());
    let canvas_ref = create_node_ref::<Canvas>();

    let query_key = create_memo(move |_| params.with(GraphParams::query_key));

    // При смене ключа: показываем кэш или возвращаемся к загрузке, затем
    // грузим ключ. Результаты устаревших ключей до view не доходят.
    create_effect(move |_| {
        let key = query_key.get();
        let cached = use_case.cached(&key);
        view_state.update(|state| state.key_changed(cached));

        let use_case = use_case.clone();
        spawn_local(async move {
            let outcome = use_case.load(key).await;
            view_state.try_update(|state| state.apply(outcome));
        });
    });

    let chart_input = create_memo(move |_| view_state.with(|state| build_chart_input(state.bundle())));

    // NodeRef загружается до вставки canvas в документ; рендер идёт в spawn_local
    create_effect(move |_| {
        let input = chart_input.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if !view_state.with(GraphViewState::shows_chart) {
            return;
        }
        let renderer = renderer.clone();
        spawn_local(async move {
            if let Err(e) = render_if_attached(&renderer, canvas.is_connected(), &input) {
                crate::log_error!(LogComponent::Presentation("StrategyGraph"), "❌ {}", e);
            }
        });
    });

    let canvas_id = config.canvas_id;

    view! {
        <style>{STYLES}</style>
        <div class="strategy-graph">
            <Show
                when=move || view_state.with(GraphViewState::shows_chart)
                fallback=|| view! { <LoadingView /> }
            >
                <div class="graph-controls">
                    <ScaleSelector params=params />
                    <DateRangePicker params=params />
                </div>
                <ErrorBanner view_state=view_state />
                <canvas
                    id=canvas_id.clone()
                    node_ref=canvas_ref
                    style="max-height: 400px; position: relative;"
                />
            </Show>
        </div>
    }
}

/// ⏳ Заменяет весь виджет, пока у активного ключа нет данных
#[component]
fn LoadingView() -> impl IntoView {
    view! { <div class="graph-loading">"Загрузка..."</div> }
}

/// 🕐 Ссылки час/день/неделя/месяц, активная подсвечена
#[component]
fn ScaleSelector(params: RwSignal<GraphParams>) -> impl IntoView {
    let links = params.with_untracked(scale_links);

    view! {
        <div class="scale-selector">
            {links
                .into_iter()
                .map(|link| {
                    let scale = link.scale;
                    view! {
                        <a
                            href="#"
                            class="scale-link"
                            class:active=move || params.with(|p| p.scale() == scale)
                            on:click=move |ev: ev::MouseEvent| {
                                ev.prevent_default();
                                params.update(|p| select_scale(p, scale));
                            }
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// 📅 Два поля даты для интервала
#[component]
fn DateRangePicker(params: RwSignal<GraphParams>) -> impl IntoView {
    let on_change = move |end: RangeEnd| {
        move |ev: ev::Event| {
            let raw = event_target_value(&ev);
            params.update(|p| change_range_end(p, end, &raw));
        }
    };

    view! {
        <div class="date-range">
            <input
                type="date"
                prop:value=move || params.with(|p| input_value(p, RangeEnd::From))
                on:change=on_change(RangeEnd::From)
            />
            " - "
            <input
                type="date"
                prop:value=move || params.with(|p| input_value(p, RangeEnd::To))
                on:change=on_change(RangeEnd::To)
            />
        </div>
    }
}

/// ⚠️ Ошибка последнего запроса над (устаревшим) графиком
#[component]
fn ErrorBanner(view_state: RwSignal<GraphViewState>) -> impl IntoView {
    let message = move || {
        view_state.with(|state| state.error().map(|e| format!("[{}] {}", e.kind(), e)))
    };

    view! {
        <Show when=move || message().is_some()>
            <div class="graph-error">{move || message().unwrap_or_default()}</div>
        </Show>
    }
}
