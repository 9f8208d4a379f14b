//! Team roster cards with create/edit/delete/add-member actions.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::team_dialogs::{AddMemberDialog, EditTeamDialog};
use crate::state::notify::NotifyState;
use crate::state::roster::RosterState;

/// Grid of team cards; mutations call the backend first and only touch
/// local state once it agrees.
#[component]
pub fn TeamsList() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    // Which team, if any, is being edited / extended right now.
    let editing = RwSignal::new(None::<Uuid>);
    let adding_to = RwSignal::new(None::<Uuid>);

    let on_delete = Callback::new(move |id: Uuid| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::delete_team(id).await {
                    roster.update(|r| r.remove_team(id));
                } else {
                    notify.update(|n| {
                        n.warning("Server error occurred");
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, roster, notify);
        }
    });

    view! {
        <div class="teams-list">
            {move || {
                let state = roster.get();
                if state.teams_loading {
                    view! {
                        <div class="page-loading" aria-label="Loading">
                            <div class="page-loading__spinner"></div>
                        </div>
                    }
                        .into_any()
                } else if state.teams.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No teams found."</p>
                            <p>"Add your first team to get started."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="teams-list__grid">
                            {state
                                .teams
                                .into_iter()
                                .map(|team| {
                                    let id = team.id;
                                    let member_count = team.members.len();
                                    view! {
                                        <div class="team-card">
                                            <div class="team-card__header">
                                                <h3>{team.name.clone()}</h3>
                                                <div class="team-card__actions">
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Edit team"
                                                        on:click=move |_| editing.set(Some(id))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Delete team"
                                                        on:click=move |_| on_delete.run(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                            <ul class="team-card__members">
                                                {team
                                                    .members
                                                    .iter()
                                                    .map(|m| view! { <li>{m.name.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                            <div class="team-card__footer">
                                                <span class="team-card__count">
                                                    {format!("{member_count} members")}
                                                </span>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| adding_to.set(Some(id))
                                                >
                                                    "+ Add member"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}

            {move || {
                editing
                    .get()
                    .map(|id| view! { <EditTeamDialog team_id=id on_close=Callback::new(move |()| editing.set(None))/> })
            }}
            {move || {
                adding_to
                    .get()
                    .map(|id| {
                        view! { <AddMemberDialog team_id=id on_close=Callback::new(move |()| adding_to.set(None))/> }
                    })
            }}
        </div>
    }
}
