use model::{KpiIcon, Trend};
use yew::prelude::*;

fn icon_class(icon: KpiIcon) -> &'static str {
    match icon {
        KpiIcon::Dollar => "fas fa-dollar-sign",
        KpiIcon::Users => "fas fa-users",
        KpiIcon::Cart => "fas fa-shopping-cart",
        KpiIcon::TrendingUp => "fas fa-chart-line",
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-success",
        Trend::Down => "text-error",
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub change: AttrValue,
    pub icon: KpiIcon,
    pub trend: Trend,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow duration-300">
            <div class="card-body p-6">
                <div class="flex items-start justify-between">
                    <div class="space-y-2">
                        <p class="text-sm text-gray-500 font-medium">{&props.title}</p>
                        <h3 class="text-3xl font-bold">{&props.value}</h3>
                        <p class={classes!("text-sm", "font-medium", trend_class(props.trend))}>
                            {&props.change}
                        </p>
                    </div>
                    <div class="p-3 bg-primary rounded-lg">
                        <i class={classes!(icon_class(props.icon), "text-xl", "text-primary-content")}></i>
                    </div>
                </div>
            </div>
        </div>
    }
}
