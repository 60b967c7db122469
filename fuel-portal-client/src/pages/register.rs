use std::str::FromStr;

use fuel_portal_common::user::{RegisterUserRequest, Role};
use leptos::*;
use leptos_router::{use_navigate, A};

use crate::{api::PortalApi, pages::Page};

#[component]
pub fn Register(cx: Scope, api: PortalApi) -> impl IntoView {
    let (register_error, set_register_error) = create_signal(cx, None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(cx, false);

    let (name, set_name) = create_signal(cx, String::new());
    let (email, set_email) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());
    let (fuel_card_no, set_fuel_card_no) = create_signal(cx, String::new());
    let (role, set_role) = create_signal(cx, Role::Employee);

    let register_action = create_action(cx, move |request: &RegisterUserRequest| {
        let request = request.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = api.register(&request).await;
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(response) => {
                    set_register_error.update(|e| *e = None);
                    gloo_dialogs::alert(&response.msg);
                    let navigate = use_navigate(cx);
                    if let Err(error) = navigate(Page::Login.path(), Default::default()) {
                        error!("Unable to navigate to the login page: {error:?}");
                    }
                }
                Err(error) => {
                    error!("Unable to register {}: {error}", request.email);
                    set_register_error.update(|e| *e = Some(error.to_string()));
                }
            }
        }
    });

    let dispatch_action = move || {
        register_action.dispatch(RegisterUserRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            fuel_card_no: fuel_card_no.get(),
            role: role.get(),
        })
    };

    let button_is_disabled = Signal::derive(cx, move || {
        wait_for_response.get()
            || name.get().is_empty()
            || email.get().is_empty()
            || password.get().is_empty()
            || fuel_card_no.get().is_empty()
    });

    view! { cx,
        <main>
            <h3>"Register for FuelTrackr"</h3>
            <form on:submit=|ev| ev.prevent_default()>
                {move || {
                    register_error
                        .get()
                        .map(|err| view! { cx, <p class="form-error">{err}</p> })
                }}
                <div class="form-group">
                    <label for="name">"Full Name"</label>
                    <input
                        class="form-control"
                        type="text"
                        id="name"
                        required={true}
                        on:input=move |ev| set_name.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        class="form-control"
                        type="email"
                        id="email"
                        required={true}
                        on:input=move |ev| set_email.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        class="form-control"
                        type="password"
                        id="password"
                        required={true}
                        on:input=move |ev| set_password.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="fuel_card_no">"Fuel Card Number"</label>
                    <input
                        class="form-control"
                        type="text"
                        id="fuel_card_no"
                        required={true}
                        on:input=move |ev| set_fuel_card_no.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="role">"Role"</label>
                    <select
                        class="form-control"
                        id="role"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            match Role::from_str(&value) {
                                Ok(selected) => set_role.update(|r| *r = selected),
                                Err(_) => error!("Unknown role option selected: {value}"),
                            }
                        }
                    >
                        <option value="employee" selected={true}>"Employee"</option>
                        <option value="admin">"Admin (Finance)"</option>
                    </select>
                </div>
                <button
                    class="btn btn-primary"
                    prop:disabled=move || button_is_disabled.get()
                    on:click=move |_| dispatch_action()
                >
                    "Register"
                </button>
            </form>
            <p>"Already have an account? " <A href=Page::Login.path()>"Login"</A></p>
        </main>
    }
}
