#![cfg(target_arch = "wasm32")]
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use strategy_graph_wasm::app::StrategyGraph;
use strategy_graph_wasm::infrastructure::ApiConfig;
use strategy_graph_wasm::presentation::wasm_api::config_from_js;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn find(selector: &str) -> Option<web_sys::Element> {
    document().query_selector(selector).unwrap()
}

async fn wait_for(selector: &str) -> web_sys::Element {
    for _ in 0..50 {
        if let Some(element) = find(selector) {
            return element;
        }
        sleep(Duration::from_millis(100)).await;
    }
    panic!("{selector} never appeared");
}

fn window_counter(name: &str) -> f64 {
    js_sys::Reflect::get(&web_sys::window().unwrap(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

fn install_render_stub() {
    let stub = js_sys::Function::new_with_args(
        "id, config",
        "window.__renderCalls = (window.__renderCalls || 0) + 1;\n\
         const canvas = document.getElementById(id);\n\
         if (canvas && canvas.isConnected && config.type === 'line') {\n\
             window.__attachedRenders = (window.__attachedRenders || 0) + 1;\n\
         }",
    );
    js_sys::Reflect::set(&web_sys::window().unwrap(), &JsValue::from_str("renderLineChart"), &stub).unwrap();
}

#[wasm_bindgen_test(async)]
async fn loading_then_error_banner_with_controls() {
    install_render_stub();
    let config = ApiConfig::default()
        .with_base_url("http://127.0.0.1:9/api")
        .with_max_retries(0)
        .with_canvas_id("graph-under-test");
    mount_to_body(move || view! { <StrategyGraph config=config.clone() /> });

    assert!(find(".graph-loading").is_some());
    assert!(find("canvas").is_none());

    let banner = wait_for(".graph-error").await;
    assert!(banner.text_content().unwrap_or_default().starts_with("[fetch]"));
    assert!(find(".graph-loading").is_none());
    assert!(find("#graph-under-test").is_some());

    let active = find(".scale-link.active").unwrap();
    assert_eq!(active.text_content().as_deref(), Some("День"));

    for _ in 0..20 {
        if window_counter("__attachedRenders") >= 1.0 {
            break;
        }
        sleep(Duration::from_millis(50)).await;
    }
    assert!(window_counter("__renderCalls") >= 1.0);
    assert!(window_counter("__attachedRenders") >= 1.0);
    assert_eq!(window_counter("__renderCalls"), window_counter("__attachedRenders"));
}

#[wasm_bindgen_test]
fn js_config_defaults_and_bounds() {
    assert_eq!(config_from_js(&JsValue::NULL).unwrap(), ApiConfig::default());
    assert_eq!(config_from_js(&JsValue::UNDEFINED).unwrap(), ApiConfig::default());

    let partial = js_sys::JSON::parse(r#"{"strategyId":"7","cacheCapacity":4}"#).unwrap();
    let config = config_from_js(&partial).unwrap();
    assert_eq!(config.strategy_id.value(), "7");
    assert_eq!(config.cache_capacity, 4);

    let huge = js_sys::JSON::parse(r#"{"lookbackYears":2147483648}"#).unwrap();
    assert!(config_from_js(&huge).is_err());
}
