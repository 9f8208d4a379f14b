//! Employee roster table.

use leptos::prelude::*;

use crate::state::roster::RosterState;

/// Plain table over the employee drafts; thin rendering only, all
/// mutation goes through the page's dialogs.
#[component]
pub fn EmployeeTable() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    view! {
        {move || {
            let employees = roster.get().employees;
            if employees.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"No employees found."</p>
                        <p>"Add your first employee to get started."</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <table class="employee-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Department"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {employees
                                .into_iter()
                                .map(|e| {
                                    view! {
                                        <tr>
                                            <td>{e.full_name()}</td>
                                            <td>{e.email.clone()}</td>
                                            <td>{e.role.clone().unwrap_or_default()}</td>
                                            <td>{e.department.clone().unwrap_or_default()}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }
        }}
    }
}
