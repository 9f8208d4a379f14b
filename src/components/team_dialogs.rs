//! Modal dialogs for team creation, renaming, and membership.

use leptos::prelude::*;
use uuid::Uuid;

use crate::net::types::{Team, TeamMember};
use crate::state::notify::NotifyState;
use crate::state::roster::RosterState;

/// Modal dialog for creating a new team.
#[component]
pub fn CreateTeamDialog(on_close: Callback<()>) -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let name = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let team_name = name.get().trim().to_owned();
        if team_name.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_team(&team_name).await {
                    Some(team) => roster.update(|r| r.add_team(team)),
                    None => {
                        // Keep the page usable against a cold backend.
                        notify.update(|n| {
                            n.warning("Server error occurred; team saved locally");
                        });
                        roster.update(|r| {
                            r.add_team(Team {
                                id: Uuid::new_v4(),
                                name: team_name.clone(),
                                members: Vec::new(),
                            });
                        });
                    }
                }
                on_close.run(());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (team_name, roster, notify, on_close);
        }
    });

    view! {
        <DialogShell title="Create Team" on_close=on_close>
            <label class="dialog__label">
                "Team Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Create"
                </button>
            </div>
        </DialogShell>
    }
}

/// Modal dialog for renaming an existing team.
#[component]
pub fn EditTeamDialog(team_id: Uuid, on_close: Callback<()>) -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let name = RwSignal::new(
        roster
            .get_untracked()
            .teams
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.clone())
            .unwrap_or_default(),
    );

    let submit = Callback::new(move |()| {
        let team_name = name.get().trim().to_owned();
        if team_name.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::update_team(team_id, &team_name).await {
                    roster.update(|r| r.rename_team(team_id, &team_name));
                    on_close.run(());
                } else {
                    notify.update(|n| {
                        n.warning("Server error occurred");
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (team_name, roster, notify, on_close);
        }
    });

    view! {
        <DialogShell title="Edit Team" on_close=on_close>
            <label class="dialog__label">
                "Team Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Save"
                </button>
            </div>
        </DialogShell>
    }
}

/// Modal dialog for adding an employee to a team roster.
#[component]
pub fn AddMemberDialog(team_id: Uuid, on_close: Callback<()>) -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let selected = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let employee_id = selected.get();
        if employee_id.is_empty() {
            return;
        }
        let member = roster.get_untracked().employee(&employee_id).map(|e| TeamMember {
            id: e.id.clone(),
            name: e.full_name(),
        });
        let Some(member) = member else { return };
        let added = roster.try_update(|r| r.add_member(team_id, member)).unwrap_or(false);
        if added {
            on_close.run(());
        } else {
            notify.update(|n| {
                n.warning("Already on this team");
            });
        }
    });

    view! {
        <DialogShell title="Add Team Member" on_close=on_close>
            <label class="dialog__label">
                "Employee"
                <select
                    class="dialog__input"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"Select an employee"</option>
                    {move || {
                        roster
                            .get()
                            .employees
                            .iter()
                            .map(|e| {
                                view! { <option value=e.id.clone()>{e.full_name()}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Add"
                </button>
            </div>
        </DialogShell>
    }
}

/// Shared backdrop + card chrome for the dialogs above.
#[component]
fn DialogShell(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
