use compute::badge::order_badge;
use compute::commands::{notify, SalesCommands, StubCommands};
use compute::{filter_orders, SalesSummary, StatusFilter};
use model::seed;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::summary::SalesStats;
use crate::common::toast::ToastContext;

#[function_component(Sales)]
pub fn sales() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastContext not found");
    let orders = use_memo((), |_| seed::orders());
    let status_filter = use_state(StatusFilter::default);

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<HtmlSelectElement>() {
                let value = target.value();
                match value.parse::<StatusFilter>() {
                    Ok(filter) => status_filter.set(filter),
                    Err(err) => {
                        log::warn!("{}; showing all orders", err);
                        status_filter.set(StatusFilter::All);
                    }
                }
            }
        })
    };

    let on_export = {
        let orders = orders.clone();
        Callback::from(move |_: MouseEvent| {
            notify(&toast_ctx, StubCommands.export_csv(&orders));
        })
    };

    // Metrics always cover every order, whatever the filter shows
    let summary = SalesSummary::from_orders(&orders);
    let filtered = filter_orders(&orders, *status_filter);

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold mb-2">{"Sales & Orders"}</h1>
                    <p class="text-gray-500">{"Track and manage all sales transactions"}</p>
                </div>
                <button class="btn btn-primary gap-2" onclick={on_export}>
                    <i class="fas fa-download"></i>
                    {"Export CSV"}
                </button>
            </div>

            <SalesStats summary={summary} />

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <div>
                            <h2 class="card-title">{"Order History"}</h2>
                            <p class="text-sm text-gray-500">{"Complete list of all orders"}</p>
                        </div>
                        <select class="select select-bordered w-[180px]" onchange={on_status_change}>
                            { for StatusFilter::options().into_iter().map(|option| html! {
                                <option value={option.as_str()} selected={*status_filter == option}>
                                    {option.label()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="overflow-x-auto rounded-lg border border-base-300 mt-4">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Order ID"}</th>
                                    <th>{"Customer"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Items"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for filtered.iter().map(|order| html! {
                                    <tr key={order.id.clone()}>
                                        <td class="font-medium">{&order.id}</td>
                                        <td>{&order.customer}</td>
                                        <td>{order.display_date()}</td>
                                        <td>{order.items}</td>
                                        <td class="font-semibold">{&order.amount}</td>
                                        <td>
                                            <span class={classes!("badge", order_badge(order.status).class())}>
                                                {order.status.as_str()}
                                            </span>
                                        </td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
