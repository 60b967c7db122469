use fuel_portal_common::travel::{compute_total_km, CreateTravelRequest, TravelLogEntry};
use leptos::*;

use crate::api::PortalApi;

#[component]
pub fn Travels(cx: Scope, api: PortalApi) -> impl IntoView {
    let logs = create_rw_signal(cx, Vec::<TravelLogEntry>::new());
    let (travel_error, set_travel_error) = create_signal(cx, None::<String>);

    let (meter_start, set_meter_start) = create_signal(cx, String::new());
    let (meter_end, set_meter_end) = create_signal(cx, String::new());
    let (official_km, set_official_km) = create_signal(cx, String::new());
    let (private_km, set_private_km) = create_signal(cx, String::new());
    let (remarks, set_remarks) = create_signal(cx, String::new());

    // Preview only. The backend recomputes and stores the authoritative total.
    let total_km = Signal::derive(cx, move || {
        compute_total_km(&meter_start.get(), &meter_end.get())
    });

    // A failed refresh keeps the previous list on screen and only reports to
    // the console.
    let load_logs = create_action(cx, move |_: &()| async move {
        match api.my_travels().await {
            Ok(entries) => logs.update(|l| *l = entries),
            Err(error) => error!("Error fetching travel logs: {error}"),
        }
    });

    let add_travel = create_action(cx, move |request: &CreateTravelRequest| {
        let request = request.clone();
        async move {
            match api.create_travel(&request).await {
                Ok(_) => {
                    set_travel_error.update(|e| *e = None);
                    set_meter_start.update(|v| v.clear());
                    set_meter_end.update(|v| v.clear());
                    set_official_km.update(|v| v.clear());
                    set_private_km.update(|v| v.clear());
                    set_remarks.update(|v| v.clear());
                    load_logs.dispatch(());
                }
                Err(error) => {
                    error!("Error adding travel log: {error}");
                    set_travel_error.update(|e| *e = Some(error.to_string()));
                }
            }
        }
    });

    let dispatch_action = move || {
        // Native form constraints keep the numeric fields parseable; bail out
        // if a browser let one through anyway.
        let Some(request) = CreateTravelRequest::parse(
            &meter_start.get(),
            &meter_end.get(),
            &official_km.get(),
            &private_km.get(),
            &remarks.get(),
        ) else {
            error!("Travel form submitted with non numeric meter readings");
            return;
        };
        add_travel.dispatch(request);
    };

    load_logs.dispatch(());

    view! { cx,
        <main>
            <h2>"My Travels"</h2>
            <form on:submit=|ev| ev.prevent_default()>
                {move || {
                    travel_error
                        .get()
                        .map(|err| view! { cx, <p class="form-error">{err}</p> })
                }}
                <div class="form-group">
                    <label for="meter_start">"Meter Start"</label>
                    <input
                        class="form-control"
                        type="number"
                        id="meter_start"
                        required={true}
                        prop:value=move || meter_start.get()
                        on:input=move |ev| set_meter_start.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="meter_end">"Meter End"</label>
                    <input
                        class="form-control"
                        type="number"
                        id="meter_end"
                        required={true}
                        prop:value=move || meter_end.get()
                        on:input=move |ev| set_meter_end.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="official_km">"Official KM"</label>
                    <input
                        class="form-control"
                        type="number"
                        id="official_km"
                        required={true}
                        prop:value=move || official_km.get()
                        on:input=move |ev| set_official_km.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="private_km">"Private KM"</label>
                    <input
                        class="form-control"
                        type="number"
                        id="private_km"
                        required={true}
                        prop:value=move || private_km.get()
                        on:input=move |ev| set_private_km.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="remarks">"Remarks"</label>
                    <input
                        class="form-control"
                        type="text"
                        id="remarks"
                        prop:value=move || remarks.get()
                        on:input=move |ev| set_remarks.update(|v| *v = event_target_value(&ev))
                    />
                </div>
                <p>"Total KM: " <strong>{move || total_km.get()}</strong></p>
                <button class="btn btn-primary" on:click=move |_| dispatch_action()>
                    "Add Travel"
                </button>
            </form>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Meter Start"</th>
                        <th>"Meter End"</th>
                        <th>"Official KM"</th>
                        <th>"Private KM"</th>
                        <th>"Total KM"</th>
                        <th>"Remarks"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        logs.get()
                            .into_iter()
                            .map(|log| {
                                view! { cx,
                                    <tr>
                                        <td>{log.date.format("%Y-%m-%d").to_string()}</td>
                                        <td>{log.meter_start}</td>
                                        <td>{log.meter_end}</td>
                                        <td>{log.official_km}</td>
                                        <td>{log.private_km}</td>
                                        <td>{log.total_km}</td>
                                        <td>{log.remarks}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </main>
    }
}
