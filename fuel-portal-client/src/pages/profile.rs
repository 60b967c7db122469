use fuel_portal_common::user::{UpdateProfileRequest, User};
use leptos::*;

use crate::api::PortalApi;

#[component]
pub fn Profile(cx: Scope, api: PortalApi) -> impl IntoView {
    let profile = create_rw_signal(cx, None::<User>);

    let load_profile = create_action(cx, move |_: &()| async move {
        match api.me().await {
            Ok(user) => profile.update(|p| *p = Some(user)),
            Err(error) => error!("Error fetching profile: {error}"),
        }
    });
    load_profile.dispatch(());

    view! { cx,
        <main>
            <h2>"My Profile"</h2>
            {move || match profile.get() {
                Some(user) => view! { cx, <ProfileForm api=api user=user/> }.into_view(cx),
                None => view! { cx, <p>"Loading profile..."</p> }.into_view(cx),
            }}
        </main>
    }
}

#[component]
fn ProfileForm(cx: Scope, api: PortalApi, user: User) -> impl IntoView {
    let (profile_error, set_profile_error) = create_signal(cx, None::<String>);
    let (saved, set_saved) = create_signal(cx, false);
    let (name, set_name) = create_signal(cx, user.name.clone());
    let (fuel_card_no, set_fuel_card_no) = create_signal(cx, user.fuel_card_no.clone());

    let save_action = create_action(cx, move |request: &UpdateProfileRequest| {
        let request = request.clone();
        async move {
            match api.update_me(&request).await {
                Ok(_) => {
                    set_profile_error.update(|e| *e = None);
                    set_saved.update(|s| *s = true);
                }
                Err(error) => {
                    error!("Error updating profile: {error}");
                    set_saved.update(|s| *s = false);
                    set_profile_error.update(|e| *e = Some(error.to_string()));
                }
            }
        }
    });

    let dispatch_action = move || {
        save_action.dispatch(UpdateProfileRequest {
            name: name.get(),
            fuel_card_no: fuel_card_no.get(),
        })
    };

    view! { cx,
        <form on:submit=|ev| ev.prevent_default()>
            {move || {
                profile_error
                    .get()
                    .map(|err| view! { cx, <p class="form-error">{err}</p> })
            }}
            {move || {
                saved
                    .get()
                    .then(|| view! { cx, <p class="form-success">"Profile updated successfully"</p> })
            }}
            <div class="form-group">
                <label for="name">"Full Name"</label>
                <input
                    class="form-control"
                    type="text"
                    id="name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.update(|v| *v = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    class="form-control"
                    type="email"
                    id="email"
                    value=user.email.clone()
                    disabled={true}
                />
            </div>
            <div class="form-group">
                <label for="fuel_card_no">"Fuel Card Number"</label>
                <input
                    class="form-control"
                    type="text"
                    id="fuel_card_no"
                    prop:value=move || fuel_card_no.get()
                    on:input=move |ev| set_fuel_card_no.update(|v| *v = event_target_value(&ev))
                />
            </div>
            <button class="btn btn-primary" on:click=move |_| dispatch_action()>
                "Save Changes"
            </button>
        </form>
    }
}
