use model::seed;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;

/// Demo sign-in. Any click starts a session for the seed user; there are no credentials.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let navigator = use_navigator();
    let authenticated = session.is_authenticated();

    // Leaves the login page once the session is in place
    use_effect_with(authenticated, move |authenticated| {
        if *authenticated {
            match navigator {
                Some(navigator) => navigator.replace(&Route::Dashboard),
                None => log::warn!("No navigator available after sign-in"),
            }
        }
        || ()
    });

    let on_sign_in = {
        let login = session.login.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Signing in as demo user");
            login.emit(seed::demo_user());
        })
    };

    if authenticated {
        return html! {};
    }

    html! {
        <div class="flex min-h-screen items-center justify-center bg-base-200">
            <div class="card w-96 bg-base-100 shadow-xl">
                <div class="card-body items-center text-center">
                    <div class="text-primary text-4xl mb-2">
                        <i class="fas fa-chart-line"></i>
                    </div>
                    <h1 class="card-title text-2xl">{"CRM Pro"}</h1>
                    <p class="text-sm text-gray-500">{"Sign in to manage customers and sales"}</p>
                    <div class="card-actions w-full mt-6">
                        <button class="btn btn-primary w-full" onclick={on_sign_in}>
                            <i class="fas fa-sign-in-alt"></i>
                            {"Sign in as demo user"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
