use compute::SalesSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: SalesSummary,
}

#[function_component(SalesStats)]
pub fn sales_stats(props: &Props) -> Html {
    let summary = &props.summary;
    let cards = [
        ("Total Orders", summary.total_orders.to_string()),
        ("Total Revenue", summary.total_revenue.to_string()),
        ("Avg Order Value", summary.average_order_value.to_string()),
    ];

    html! {
        <div class="grid gap-6 md:grid-cols-3">
            { for cards.into_iter().map(|(title, value)| html! {
                <div class="stats shadow bg-base-100">
                    <div class="stat">
                        <div class="stat-title">{title}</div>
                        <div class="stat-value">{value}</div>
                    </div>
                </div>
            })}
        </div>
    }
}
