use leptos::*;

#[component]
pub fn CredentialsForm(
    cx: Scope,
    action: Action<(String, String), ()>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let (email, set_email) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());

    let dispatch_action = move || action.dispatch((email.get(), password.get()));

    let button_is_disabled = Signal::derive(cx, move || {
        disabled.get() || password.get().is_empty() || email.get().is_empty()
    });

    view! { cx,
        <main>
            <h3>"Login to FuelTrackr"</h3>
            <form on:submit=|ev| ev.prevent_default()>
                {move || error.get().map(|err| view! { cx, <p class="form-error">{err}</p> })}
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        class="form-control"
                        type="email"
                        id="email"
                        required={true}
                        prop:disabled=move || disabled.get()
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
                        prop:disabled=move || disabled.get()
                        on:input=move |ev| set_password.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <button
                    class="btn btn-primary"
                    prop:disabled=move || button_is_disabled.get()
                    on:click=move |_| dispatch_action()
                >
                    "Login"
                </button>
            </form>
        </main>
    }
}
