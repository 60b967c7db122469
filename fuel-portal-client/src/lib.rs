mod api;
mod components;
mod pages;
mod session;

use fuel_portal_common::user::User;
use leptos::*;
use leptos_router::*;

use crate::{
    api::{Api, PortalApi},
    components::nav::NavBar,
    pages::{
        admin::AdminDashboard, login::Login, profile::Profile, register::Register,
        travels::Travels, Page,
    },
    session::BrowserTokenStore,
};

/// Origin of the FuelTrackr REST API, pointing at the local development
/// backend
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    let api: PortalApi = Api::new(DEFAULT_API_URL, BrowserTokenStore);

    let user_info = create_rw_signal(cx, None::<User>);

    let fetch_user_info = create_action(cx, move |_: &()| async move {
        match api.me().await {
            Ok(user) => user_info.update(|v| *v = Some(user)),
            Err(error) => error!("Unable to fetch the current user profile: {error}"),
        }
    });

    // A token may already be sitting in storage from an earlier visit. The
    // profile fetch repopulates the nav; a rejection is only logged and the
    // user can keep browsing to the login page.
    if api.session_exists() {
        fetch_user_info.dispatch(());
    }

    let on_login = move |user: User| {
        user_info.update(|v| *v = Some(user));
    };

    view! { cx,
        <Router>
            <NavBar user_info=user_info.into()/>
            <Routes>
                <Route
                    path=Page::Login.path()
                    view=move |cx| {
                        view! { cx, <Login api=api on_success=on_login/> }
                    }
                />
                <Route
                    path=Page::Register.path()
                    view=move |cx| {
                        view! { cx, <Register api=api/> }
                    }
                />
                <Route
                    path=Page::Dashboard.path()
                    view=move |cx| {
                        view! { cx, <Travels api=api/> }
                    }
                />
                <Route
                    path=Page::Profile.path()
                    view=move |cx| {
                        view! { cx, <Profile api=api/> }
                    }
                />
                <Route
                    path=Page::Admin.path()
                    view=move |cx| {
                        view! { cx, <AdminDashboard api=api/> }
                    }
                />
            </Routes>
        </Router>
    }
}
