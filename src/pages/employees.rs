//! Employees page: roster table and team management.
//!
//! Restricted to HR-side roles; everyone else is denied by the route
//! guard and sent back where they came from.

use leptos::prelude::*;

use crate::components::add_employee_dialog::AddEmployeeDialog;
use crate::components::employee_table::EmployeeTable;
use crate::components::guard::RequireRole;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::components::team_dialogs::CreateTeamDialog;
use crate::components::teams_list::TeamsList;
use crate::state::roster::{EMPLOYEES_KEY, RosterState};

/// Which roster view is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RosterTab {
    #[default]
    All,
    Teams,
}

/// Employees page, visible to HR-side roles only.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec!["ADMIN", "HR"]>
            <EmployeesContent/>
        </RequireRole>
    }
}

#[component]
fn EmployeesContent() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    let tab = RwSignal::new(RosterTab::All);
    let show_employee_dialog = RwSignal::new(false);
    let show_team_dialog = RwSignal::new(false);

    // Load saved employee drafts and the team list once on entry,
    // independent of any particular component's lifetime.
    let loaded = StoredValue::new(false);
    Effect::new(move || {
        if loaded.get_value() {
            return;
        }
        loaded.set_value(true);
        if let Some(saved) = crate::util::storage::load_json(EMPLOYEES_KEY) {
            roster.update(|r| r.employees = saved);
        }
        roster.update(|r| r.teams_loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let teams = match crate::net::api::fetch_teams().await {
                Some(teams) => teams,
                None => {
                    leptos::logging::warn!("team list unavailable; showing sample teams");
                    crate::state::roster::sample_teams()
                }
            };
            roster.update(|r| r.set_teams(teams));
        });
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="employees">
                    <header class="employees__header">
                        <h1>"Employees"</h1>
                        <div class="employees__actions">
                            <button class="btn btn--primary" on:click=move |_| show_employee_dialog.set(true)>
                                "+ Add Person"
                            </button>
                            <button class="btn" on:click=move |_| show_team_dialog.set(true)>
                                "+ New Team"
                            </button>
                        </div>
                    </header>

                    <div class="employees__tabs">
                        <button
                            class="tab"
                            class=("tab--active", move || tab.get() == RosterTab::All)
                            on:click=move |_| tab.set(RosterTab::All)
                        >
                            "All"
                        </button>
                        <button
                            class="tab"
                            class=("tab--active", move || tab.get() == RosterTab::Teams)
                            on:click=move |_| tab.set(RosterTab::Teams)
                        >
                            "Teams"
                        </button>
                    </div>

                    {move || match tab.get() {
                        RosterTab::All => view! { <EmployeeTable/> }.into_any(),
                        RosterTab::Teams => view! { <TeamsList/> }.into_any(),
                    }}

                    <Show when=move || show_employee_dialog.get()>
                        <AddEmployeeDialog on_close=Callback::new(move |()| show_employee_dialog.set(false))/>
                    </Show>
                    <Show when=move || show_team_dialog.get()>
                        <CreateTeamDialog on_close=Callback::new(move |()| show_team_dialog.set(false))/>
                    </Show>
                </main>
            </div>
        </div>
    }
}
