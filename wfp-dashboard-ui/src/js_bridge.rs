//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart for the illustrative fires-by-month series lives
//! in `assets/js/bar-chart.js`, evaluated as a global (no ES modules)
//! and exposed via `window.*`. This module serializes data and calls
//! that global safely.

// Embed the chart JS at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WFP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS defines `renderBarChart(...)` via a `function`
/// declaration. To ensure it becomes globally accessible (not
/// block-scoped inside the setInterval callback), the script is stored
/// on `window`, evaluated at global scope once D3 is ready, and the
/// function explicitly promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__wfpChartScripts = {};",
        serde_json::to_string(BAR_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__wfpChartScripts);
                    delete window.__wfpChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__wfpChartsReady = true;
                    console.log('WFP charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the illustrative bar chart.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wfpChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[WFP] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
