use compute::dashboard::DashboardOverview;
use yew::prelude::*;

use super::activity::RecentActivity;
use super::chart::{CategoryChart, RevenueChart};
use crate::components::kpi_card::KpiCard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let overview = use_memo((), |_| DashboardOverview::from_seed());
    let (months, revenue) = overview.revenue_series();
    let (categories, sales) = overview.category_series();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold mb-2">{"Dashboard"}</h1>
                <p class="text-gray-500">{"Welcome back! Here's an overview of your business."}</p>
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                { for overview.kpis.iter().enumerate().map(|(index, kpi)| html! {
                    <KpiCard
                        key={index}
                        title={kpi.title.clone()}
                        value={kpi.value.clone()}
                        change={kpi.change.clone()}
                        icon={kpi.icon}
                        trend={kpi.trend}
                    />
                })}
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Revenue Overview"}</h2>
                        <p class="text-sm text-gray-500">{"Monthly revenue for the last 6 months"}</p>
                        <RevenueChart months={months} values={revenue} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Sales by Category"}</h2>
                        <p class="text-sm text-gray-500">{"Product category performance"}</p>
                        <CategoryChart categories={categories} values={sales} />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Recent Activity"}</h2>
                    <p class="text-sm text-gray-500">{"Latest customer interactions and orders"}</p>
                    <RecentActivity entries={overview.activity.clone()} />
                </div>
            </div>
        </div>
    }
}
