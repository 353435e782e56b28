use compute::gate::{self, GateDecision};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use super::sidebar::Sidebar;
use crate::session::SessionContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

/// Authenticated shell: sidebar plus page content.
///
/// Anonymous visitors get nothing rendered and are replaced onto the login
/// route, so going back does not return to the gated page.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let navigator = use_navigator();
    let decision = gate::evaluate(session.is_authenticated());

    use_effect_with(decision, move |decision| {
        if let GateDecision::Redirect { to, replace } = *decision {
            let route = Route::recognize(to).unwrap_or(Route::Login);
            log::debug!("Not authenticated, redirecting to {:?}", route);
            match navigator {
                Some(navigator) if replace => navigator.replace(&route),
                Some(navigator) => navigator.push(&route),
                None => log::warn!("No navigator available for redirect"),
            }
        }
        || ()
    });

    use_effect_with(props.title.clone(), |title| {
        if let Some(document) = window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | CRM Pro", title));
        }
        || ()
    });

    match decision {
        GateDecision::Redirect { .. } => html! {},
        GateDecision::Render => html! {
            <div class="flex min-h-screen w-full bg-base-200">
                <Sidebar />
                <main class="flex-1 p-8 overflow-auto">
                    { for props.children.iter() }
                </main>
            </div>
        },
    }
}
