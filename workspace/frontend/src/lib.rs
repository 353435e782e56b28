use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod common;
pub mod session;
pub mod settings;

use common::toast::ToastProvider;
use components::customers::Customers;
use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use components::sales::Sales;
use components::settings::Settings;
use pages::login::LoginPage;
use session::SessionProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/customers")]
    Customers,
    #[at("/sales")]
    Sales,
    #[at("/settings")]
    Settings,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Customers => {
            log::trace!("Rendering Customers page");
            html! { <Layout title="Customers"><Customers /></Layout> }
        }
        Route::Sales => {
            log::trace!("Rendering Sales page");
            html! { <Layout title="Sales"><Sales /></Layout> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1 class="text-3xl font-bold">{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CRM Pro Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_navigation_paths() {
        for item in compute::navigation::NAV_ITEMS.iter() {
            let route = Route::recognize(item.path);
            assert!(route.is_some(), "no route for {}", item.path);
            assert_eq!(route.unwrap().to_path(), item.path);
        }
    }

    #[test]
    fn test_login_path_is_routable() {
        assert_eq!(Route::recognize(compute::gate::LOGIN_PATH), Some(Route::Login));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::recognize("/reports"), Some(Route::NotFound));
    }
}
