//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet and Chart.js are loaded by the host page. The glue functions live
//! in `assets/js/*.js`, are evaluated as globals once the libraries are
//! present, and are exposed via `window.*`. This module serializes Rust data
//! into those calls.

use solar_core::chart::ChartSpec;
use solar_core::models::Coordinate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

static MAP_JS: &str = include_str!("../assets/js/solar-map.js");
static CHART_JS: &str = include_str!("../assets/js/solar-chart.js");

/// Name of the global the map calls with `(lat, lng)` on every click.
pub const MAP_CLICK_HANDLER: &str = "__solarMapClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Solar map JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `value` as a JS string literal.
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Interval between readiness checks.
const READY_POLL_INTERVAL_MS: u32 = 100;

/// Readiness checks before a pending call is abandoned (10 s).
const READY_POLL_ATTEMPTS: u32 = 100;

/// Run `call` once the bridge is initialized and `#container_id` exists.
fn when_ready(container_id: &str, call: &str) {
    call_js(&ready_script(container_id, call));
}

/// Poll script behind [`when_ready`]. A newer poll for the same container
/// replaces an older one, and a poll gives up after
/// [`READY_POLL_ATTEMPTS`] checks.
fn ready_script(container_id: &str, call: &str) -> String {
    format!(
        r#"
        (function() {{
            var id = {id};
            var polls = window.__solarPolls = window.__solarPolls || {{}};
            if (polls[id]) clearInterval(polls[id]);
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__solarBridgeReady && document.getElementById(id)) {{
                    clearInterval(poll);
                    delete polls[id];
                    try {{ {call} }} catch(e) {{ console.error('[solar] bridge call failed:', e); }}
                }} else if (++attempts >= {attempts}) {{
                    clearInterval(poll);
                    delete polls[id];
                    console.warn('[solar] gave up waiting for #' + id);
                }}
            }}, {interval});
            polls[id] = poll;
        }})();
        "#,
        id = js_string(container_id),
        call = call,
        attempts = READY_POLL_ATTEMPTS,
        interval = READY_POLL_INTERVAL_MS,
    )
}

/// Evaluate the glue scripts at global scope once Leaflet and Chart.js are
/// loaded, then promote their functions to `window.*`. Call once at startup.
pub fn init_bridge() {
    let all_js = [MAP_JS, CHART_JS].join("\n");
    call_js(&format!("window.__solarBridgeScripts = {};", js_string(&all_js)));

    let init_js = r#"
        (function() {
            var attempts = 0;
            var waitForLibs = setInterval(function() {
                if (++attempts > 300) {
                    clearInterval(waitForLibs);
                    console.error('Leaflet or Chart.js failed to load');
                    return;
                }
                if (typeof L !== 'undefined' && typeof Chart !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__solarBridgeScripts);
                    delete window.__solarBridgeScripts;
                    if (typeof initSolarMap !== 'undefined') window.initSolarMap = initSolarMap;
                    if (typeof placeSolarMarker !== 'undefined') window.placeSolarMarker = placeSolarMarker;
                    if (typeof centerSolarMap !== 'undefined') window.centerSolarMap = centerSolarMap;
                    if (typeof invalidateSolarMap !== 'undefined') window.invalidateSolarMap = invalidateSolarMap;
                    if (typeof renderSolarChart !== 'undefined') window.renderSolarChart = renderSolarChart;
                    if (typeof destroySolarChart !== 'undefined') window.destroySolarChart = destroySolarChart;
                    if (typeof resizeSolarChart !== 'undefined') window.resizeSolarChart = resizeSolarChart;
                    window.__solarBridgeReady = true;
                    console.log('Solar map bridge initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Create the Leaflet map inside `#container_id`.
pub fn init_map(container_id: &str, center: Coordinate, zoom: u8) {
    when_ready(
        container_id,
        &format!(
            "window.initSolarMap({}, {}, {}, {});",
            js_string(container_id),
            center.lat,
            center.lng,
            zoom
        ),
    );
}

/// Register `handler` as the map click callback. The closure lives for the
/// rest of the page's life.
pub fn register_map_click(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64)>::new(handler);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(MAP_CLICK_HANDLER),
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

/// Create the marker or move it to `at`.
pub fn place_marker(at: Coordinate) {
    call_js(&format!(
        "if (window.placeSolarMarker) window.placeSolarMarker({}, {});",
        at.lat, at.lng
    ));
}

pub fn center_map(at: Coordinate, zoom: u8) {
    call_js(&format!(
        "if (window.centerSolarMap) window.centerSolarMap({}, {}, {});",
        at.lat, at.lng, zoom
    ));
}

/// Tell Leaflet its container changed size.
pub fn invalidate_map() {
    call_js("if (window.invalidateSolarMap) window.invalidateSolarMap();");
}

/// Replace the chart in `#container_id`. The previous Chart.js instance is
/// destroyed first.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let spec_json = serde_json::to_string(spec).unwrap_or_default();
    when_ready(
        container_id,
        &format!(
            "window.renderSolarChart({}, {});",
            js_string(container_id),
            js_string(&spec_json)
        ),
    );
}

/// Destroy the current chart instance, if any.
pub fn destroy_chart() {
    call_js("if (window.destroySolarChart) window.destroySolarChart();");
}

/// Re-fit the current chart to its container.
pub fn resize_chart() {
    call_js("if (window.resizeSolarChart) window.resizeSolarChart();");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"here\"\n"), r#""it's \"here\"\n""#);
        assert_eq!(js_string("kWh/m²/day"), "\"kWh/m²/day\"");
    }

    #[test]
    fn glue_scripts_define_every_promoted_function() {
        for name in [
            "initSolarMap",
            "placeSolarMarker",
            "centerSolarMap",
            "invalidateSolarMap",
            "renderSolarChart",
            "destroySolarChart",
            "resizeSolarChart",
        ] {
            let declared = format!("function {}(", name);
            assert!(
                MAP_JS.contains(&declared) || CHART_JS.contains(&declared),
                "{} is promoted but never declared",
                name
            );
        }
        assert!(MAP_JS.contains(MAP_CLICK_HANDLER));
    }

    #[test]
    fn pending_call_polls_are_bounded_and_replaced() {
        let script = ready_script("solar-chart-container", "window.resizeSolarChart();");
        assert!(script.contains(r#"var id = "solar-chart-container";"#));
        assert!(script.contains("if (polls[id]) clearInterval(polls[id]);"));
        assert!(script.contains(&format!("++attempts >= {}", READY_POLL_ATTEMPTS)));
        assert!(script.contains(&format!("}}, {});", READY_POLL_INTERVAL_MS)));
        assert_eq!(script.matches("clearInterval(poll);").count(), 2, "cleared on success and on give-up");
    }
}
