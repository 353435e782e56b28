use compute::badge::customer_badge;
use compute::commands::{notify, CustomerCommands, StubCommands};
use compute::search_customers;
use model::seed;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::toast::ToastContext;

#[function_component(Customers)]
pub fn customers() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastContext not found");
    let customers = use_memo((), |_| seed::customers());
    let search_term = use_state(String::new);

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_term.set(input.value());
            }
        })
    };

    // Stubs only notify; the list and the search term are left untouched
    let on_edit = {
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |id: String| {
            let outcome = notify(&toast_ctx, StubCommands.edit(&id));
            log::debug!("Edit customer {}: {:?}", id, outcome);
        })
    };

    let on_delete = {
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |id: String| {
            let outcome = notify(&toast_ctx, StubCommands.delete(&id));
            log::debug!("Delete customer {}: {:?}", id, outcome);
        })
    };

    let filtered = search_customers(&customers, &search_term);

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold mb-2">{"Customers"}</h1>
                    <p class="text-gray-500">{"Manage your customer database"}</p>
                </div>
                <button class="btn btn-primary gap-2">
                    <i class="fas fa-plus"></i>
                    {"Add Customer"}
                </button>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Customer List"}</h2>
                    <p class="text-sm text-gray-500">{"View and manage all customers"}</p>

                    <div class="my-4">
                        <label class="input input-bordered flex items-center gap-2">
                            <i class="fas fa-search text-gray-400"></i>
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search customers by name or email..."
                                value={(*search_term).clone()}
                                oninput={on_search}
                            />
                        </label>
                    </div>

                    <div class="overflow-x-auto rounded-lg border border-base-300">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Phone"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Orders"}</th>
                                    <th>{"Total Spent"}</th>
                                    <th class="text-right">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for filtered.iter().map(|customer| {
                                    let edit = {
                                        let id = customer.id.clone();
                                        on_edit.reform(move |_: MouseEvent| id.clone())
                                    };
                                    let delete = {
                                        let id = customer.id.clone();
                                        on_delete.reform(move |_: MouseEvent| id.clone())
                                    };
                                    html! {
                                        <tr key={customer.id.clone()}>
                                            <td class="font-medium">{&customer.name}</td>
                                            <td>{&customer.email}</td>
                                            <td>{&customer.phone}</td>
                                            <td>
                                                <span class={classes!("badge", customer_badge(customer.status).class())}>
                                                    {customer.status.as_str()}
                                                </span>
                                            </td>
                                            <td>{customer.total_orders}</td>
                                            <td class="font-semibold">{&customer.total_spent}</td>
                                            <td class="text-right">
                                                <div class="flex justify-end gap-2">
                                                    <button class="btn btn-ghost btn-sm btn-square" onclick={edit} aria-label="Edit">
                                                        <i class="fas fa-edit"></i>
                                                    </button>
                                                    <button class="btn btn-ghost btn-sm btn-square" onclick={delete} aria-label="Delete">
                                                        <i class="fas fa-trash"></i>
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                        if filtered.is_empty() {
                            <div class="text-center py-8 text-gray-500">
                                {"No customers match your search."}
                            </div>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
