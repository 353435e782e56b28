use compute::navigation::{is_active, SidebarState, NAV_ITEMS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let state = use_state(SidebarState::default);
    let location = use_location();

    let current_path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state.toggled();
            log::trace!("Sidebar collapsed: {}", next.is_collapsed());
            state.set(next);
        })
    };

    // Redirecting is left to the layout noticing the session change
    let on_logout = session.logout.reform(|_: MouseEvent| ());

    let show_labels = state.shows_labels();

    html! {
        <aside class={classes!(state.width_class(), "bg-base-100", "border-r", "border-base-300", "transition-all", "duration-300", "flex", "flex-col")}>
            <div class="p-4 flex items-center justify-between border-b border-base-300">
                if show_labels {
                    <h1 class="text-xl font-bold">{"CRM Pro"}</h1>
                }
                <button class="btn btn-ghost btn-sm btn-square" onclick={on_toggle} aria-label="Toggle sidebar">
                    <i class={state.toggle_icon()}></i>
                </button>
            </div>

            <nav class="flex-1 p-4 space-y-2">
                { for NAV_ITEMS.iter().map(|item| {
                    let route = Route::recognize(item.path).unwrap_or(Route::NotFound);
                    let item_class = if is_active(&current_path, item.path) {
                        "bg-primary text-primary-content"
                    } else {
                        "hover:bg-base-200"
                    };
                    html! {
                        <Link<Route> to={route} classes={classes!("flex", "items-center", "gap-3", "px-3", "py-2", "rounded-lg", "transition-colors", item_class)}>
                            <i class={classes!(item.icon, "w-5", "flex-shrink-0")}></i>
                            if show_labels {
                                <span>{item.label}</span>
                            }
                        </Link<Route>>
                    }
                })}
            </nav>

            <div class="p-4 border-t border-base-300">
                <button
                    class={classes!("btn", "btn-ghost", "w-full", if show_labels { "justify-start" } else { "justify-center" }, (!show_labels).then_some("px-0"))}
                    onclick={on_logout}
                >
                    <i class="fas fa-sign-out-alt w-5"></i>
                    if show_labels {
                        <span class="ml-3">{"Logout"}</span>
                    }
                </button>
            </div>
        </aside>
    }
}
