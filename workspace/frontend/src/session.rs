//! Session collaborator handed to gated views through a Yew context.
//!
//! This is a demo provider: signing in simply installs the seed demo user.
//! Credentials, tokens and expiry are out of scope.

use model::AuthenticatedUser;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub user: Option<AuthenticatedUser>,
    pub login: Callback<AuthenticatedUser>,
    pub logout: Callback<()>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let user = use_state(|| None::<AuthenticatedUser>);

    let login = {
        let user = user.clone();
        Callback::from(move |signed_in: AuthenticatedUser| {
            log::info!("Session started for {}", signed_in.email);
            user.set(Some(signed_in));
        })
    };

    let logout = {
        let user = user.clone();
        Callback::from(move |_| {
            log::info!("Session ended");
            user.set(None);
        })
    };

    let context = SessionContext {
        user: (*user).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
