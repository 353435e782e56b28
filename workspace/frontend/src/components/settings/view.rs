use compute::commands::{notify, SettingsCommands, StubCommands};
use compute::settings::{PasswordForm, ProfileForm, NOTIFICATION_PREFERENCES};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::session::SessionContext;

/// Builds an `oninput` handler that writes the input's value into one field of a form state.
fn bind_field<F, T>(state: &UseStateHandle<T>, set: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*state).clone();
            set(&mut next, input.value());
            state.set(next);
        }
    })
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let toast_ctx = use_context::<ToastContext>().expect("ToastContext not found");
    let session = use_context::<SessionContext>().expect("SessionContext not found");

    let profile = use_state(|| ProfileForm::from_session(session.user.as_ref()));
    let password = use_state(PasswordForm::default);

    let on_save_profile = {
        let toast_ctx = toast_ctx.clone();
        let profile = profile.clone();
        Callback::from(move |_: MouseEvent| {
            notify(&toast_ctx, StubCommands.save_profile(&profile));
        })
    };

    let on_update_password = {
        let password = password.clone();
        Callback::from(move |_: MouseEvent| {
            notify(&toast_ctx, StubCommands.update_password(&password));
        })
    };

    html! {
        <div class="space-y-6 max-w-3xl">
            <div>
                <h1 class="text-3xl font-bold mb-2">{"Settings"}</h1>
                <p class="text-gray-500">{"Manage your account settings and preferences"}</p>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Profile Information"}</h2>
                    <p class="text-sm text-gray-500">{"Update your personal information"}</p>
                    <div class="form-control w-full mt-4">
                        <label class="label" for="name"><span class="label-text">{"Full Name"}</span></label>
                        <input
                            id="name"
                            type="text"
                            class="input input-bordered w-full"
                            value={profile.name.clone()}
                            oninput={bind_field(&profile, |form: &mut ProfileForm, value| form.name = value)}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label" for="email"><span class="label-text">{"Email"}</span></label>
                        <input
                            id="email"
                            type="email"
                            class="input input-bordered w-full"
                            value={profile.email.clone()}
                            oninput={bind_field(&profile, |form: &mut ProfileForm, value| form.email = value)}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label" for="role"><span class="label-text">{"Role"}</span></label>
                        <input id="role" type="text" class="input input-bordered w-full" value={profile.role.clone()} disabled=true />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save_profile}>{"Save Changes"}</button>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Change Password"}</h2>
                    <p class="text-sm text-gray-500">{"Update your password to keep your account secure"}</p>
                    <div class="form-control w-full mt-4">
                        <label class="label" for="current-password"><span class="label-text">{"Current Password"}</span></label>
                        <input
                            id="current-password"
                            type="password"
                            class="input input-bordered w-full"
                            value={password.current.clone()}
                            oninput={bind_field(&password, |form: &mut PasswordForm, value| form.current = value)}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label" for="new-password"><span class="label-text">{"New Password"}</span></label>
                        <input
                            id="new-password"
                            type="password"
                            class="input input-bordered w-full"
                            value={password.new.clone()}
                            oninput={bind_field(&password, |form: &mut PasswordForm, value| form.new = value)}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label" for="confirm-password"><span class="label-text">{"Confirm New Password"}</span></label>
                        <input
                            id="confirm-password"
                            type="password"
                            class="input input-bordered w-full"
                            value={password.confirm.clone()}
                            oninput={bind_field(&password, |form: &mut PasswordForm, value| form.confirm = value)}
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_update_password}>{"Update Password"}</button>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Notifications"}</h2>
                    <p class="text-sm text-gray-500">{"Manage your notification preferences"}</p>
                    <div class="space-y-4 mt-4">
                        { for NOTIFICATION_PREFERENCES.iter().map(|preference| html! {
                            <div class="flex items-center justify-between">
                                <div>
                                    <p class="font-medium">{preference.title}</p>
                                    <p class="text-sm text-gray-500">{preference.description}</p>
                                </div>
                                <button class="btn btn-outline btn-sm">{"Configure"}</button>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
