use plotly::common::{Line, Marker, Mode};
use plotly::{Bar, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const PRIMARY: &str = "rgb(59, 130, 246)";

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    match serde_json::to_string(value).map(|json| js_sys::JSON::parse(&json)) {
        Ok(Ok(js)) => Some(js),
        Ok(Err(e)) => {
            log::error!("Failed to parse chart JSON: {:?}", e);
            None
        }
        Err(e) => {
            log::error!("Failed to serialize chart data: {}", e);
            None
        }
    }
}

fn plot(div_id: &str, trace: Option<JsValue>, layout: serde_json::Value) {
    let Some(trace) = trace else {
        return;
    };
    let data = js_sys::Array::new();
    data.push(&trace);

    let config = serde_json::json!({"responsive": true, "displayModeBar": false});
    match (
        serde_wasm_bindgen::to_value(&layout),
        serde_wasm_bindgen::to_value(&config),
    ) {
        (Ok(layout), Ok(config)) => newPlot(div_id, data.into(), layout, config),
        _ => log::error!("Failed to convert layout for chart {}", div_id),
    }
}

fn base_layout() -> serde_json::Value {
    serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"},
        "height": 300
    })
}

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub months: Vec<String>,
    pub values: Vec<u32>,
}

#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.months.clone(), props.values.clone()),
        |(chart_ref, months, values)| {
            if let Some(element) = chart_ref.cast::<HtmlElement>() {
                let trace = Scatter::new(months.clone(), values.clone())
                    .mode(Mode::LinesMarkers)
                    .name("Revenue")
                    .line(Line::new().color(PRIMARY).width(2.0));
                plot(&element.id(), to_js(&trace), base_layout());
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-revenue" class="chart-container" style="height: 300px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub categories: Vec<String>,
    pub values: Vec<u32>,
}

#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.categories.clone(), props.values.clone()),
        |(chart_ref, categories, values)| {
            if let Some(element) = chart_ref.cast::<HtmlElement>() {
                let trace = Bar::new(categories.clone(), values.clone())
                    .name("Sales")
                    .marker(Marker::new().color(PRIMARY));

                let mut layout = base_layout();
                layout["xaxis"]["tickangle"] = serde_json::json!(-45);
                layout["margin"]["b"] = serde_json::json!(80);

                plot(&element.id(), to_js(&trace), layout);
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-category-sales" class="chart-container" style="height: 300px;"></div>
    }
}
