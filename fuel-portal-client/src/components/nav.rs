use fuel_portal_common::user::{Role, User};
use leptos::*;
use leptos_router::A;

use crate::pages::Page;

#[component]
pub fn NavBar(cx: Scope, user_info: Signal<Option<User>>) -> impl IntoView {
    view! { cx,
        <nav class="navbar">
            <A href=Page::Dashboard.path()>"My Travels"</A>
            <A href=Page::Profile.path()>"Profile"</A>
            {move || match user_info.get() {
                Some(user) => {
                    let admin_link = (user.role == Role::Admin).then(|| {
                        view! { cx, <A href=Page::Admin.path()>"Admin"</A> }
                    });
                    view! { cx,
                        {admin_link}
                        <span class="navbar-user">{user.name}</span>
                    }
                        .into_view(cx)
                }
                None => {
                    view! { cx,
                        <A href=Page::Login.path()>"Login"</A>
                        <A href=Page::Register.path()>"Register"</A>
                    }
                        .into_view(cx)
                }
            }}
        </nav>
    }
}
