use fuel_portal_common::user::{Role, User};
use gloo_dialogs::confirm;
use leptos::*;

use crate::api::PortalApi;

#[component]
pub fn AdminDashboard(cx: Scope, api: PortalApi) -> impl IntoView {
    let users = create_rw_signal(cx, Vec::<User>::new());
    let (admin_error, set_admin_error) = create_signal(cx, None::<String>);

    // A failed refresh keeps the previous table on screen and only reports to
    // the console.
    let load_users = create_action(cx, move |_: &()| async move {
        match api.all_users().await {
            Ok(list) => users.update(|u| *u = list),
            Err(error) => error!("Error fetching users: {error}"),
        }
    });

    let update_role = create_action(cx, move |(email, role): &(String, Role)| {
        let email = email.clone();
        let role = *role;
        async move {
            match api.update_role(&email, role).await {
                Ok(_) => {
                    set_admin_error.update(|e| *e = None);
                    load_users.dispatch(());
                }
                Err(error) => {
                    error!("Error updating the role of {email}: {error}");
                    set_admin_error.update(|e| *e = Some(error.to_string()));
                }
            }
        }
    });

    let delete_user = create_action(cx, move |email: &String| {
        let email = email.clone();
        async move {
            match api.delete_user(&email).await {
                Ok(()) => {
                    set_admin_error.update(|e| *e = None);
                    load_users.dispatch(());
                }
                Err(error) => {
                    error!("Error deleting {email}: {error}");
                    set_admin_error.update(|e| *e = Some(error.to_string()));
                }
            }
        }
    });

    load_users.dispatch(());

    view! { cx,
        <main>
            <h2>"Admin Dashboard"</h2>
            {move || {
                admin_error
                    .get()
                    .map(|err| view! { cx, <p class="form-error">{err}</p> })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Fuel Card"</th>
                        <th>"Role"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                view! { cx, <UserRow user=user update_role=update_role delete_user=delete_user/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </main>
    }
}

#[component]
fn UserRow(
    cx: Scope,
    user: User,
    update_role: Action<(String, Role), ()>,
    delete_user: Action<String, ()>,
) -> impl IntoView {
    let role_name: &'static str = user.role.into();

    let promote = {
        let email = user.email.clone();
        (user.role != Role::Admin).then(|| {
            view! { cx,
                <button
                    class="btn btn-secondary"
                    on:click=move |_| update_role.dispatch((email.clone(), Role::Admin))
                >
                    "Make Admin"
                </button>
            }
        })
    };
    let demote = {
        let email = user.email.clone();
        (user.role != Role::Employee).then(|| {
            view! { cx,
                <button
                    class="btn btn-secondary"
                    on:click=move |_| update_role.dispatch((email.clone(), Role::Employee))
                >
                    "Make Employee"
                </button>
            }
        })
    };
    let delete = {
        let email = user.email.clone();
        view! { cx,
            <button
                class="btn btn-danger"
                on:click=move |_| {
                    if confirm(&format!("Are you sure you want to delete {email}?")) {
                        delete_user.dispatch(email.clone());
                    }
                }
            >
                "Delete"
            </button>
        }
    };

    view! { cx,
        <tr>
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td>{user.fuel_card_no}</td>
            <td>{role_name}</td>
            <td>{promote} {demote} {delete}</td>
        </tr>
    }
}
