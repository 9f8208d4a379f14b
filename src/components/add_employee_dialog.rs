//! Modal dialog for drafting a new employee row.

use leptos::prelude::*;
use uuid::Uuid;

use crate::net::types::Employee;
use crate::state::roster::{EMPLOYEES_KEY, RosterState};
use crate::util::storage;

/// Collects the basic employee fields and appends a draft row.
///
/// Drafts persist to localStorage so the table survives reloads until a
/// real employee endpoint exists.
#[component]
pub fn AddEmployeeDialog(on_close: Callback<()>) -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let error = RwSignal::new("");

    let submit = Callback::new(move |()| {
        let first = first_name.get().trim().to_owned();
        let last = last_name.get().trim().to_owned();
        let address = email.get().trim().to_owned();
        if first.is_empty() || last.is_empty() || !address.contains('@') {
            error.set("Enter a first name, last name, and valid email.");
            return;
        }
        let employee = Employee {
            id: Uuid::new_v4().to_string(),
            first_name: first,
            last_name: last,
            email: address,
            role: Some(role.get().trim().to_owned()).filter(|r| !r.is_empty()),
            department: Some(department.get().trim().to_owned()).filter(|d| !d.is_empty()),
        };
        roster.update(|r| {
            r.add_employee(employee);
            storage::save_json(EMPLOYEES_KEY, &r.employees);
        });
        on_close.run(());
    });

    let text_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Employee"</h2>
                {text_field("First Name", first_name)}
                {text_field("Last Name", last_name)}
                {text_field("Email", email)}
                {text_field("Role", role)}
                {text_field("Department", department)}
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
