//! Dashboard page: greeting and summary metrics.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::guard::RequireRole;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;

/// Render the headcount metric, or a placeholder while it is unknown.
fn format_headcount(count: Option<u64>) -> String {
    count.map_or_else(|| "—".to_owned(), |n| n.to_string())
}

/// Dashboard page; any authenticated session may view it.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireRole>
            <DashboardContent/>
        </RequireRole>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Aggregate metrics fetch on entry; a failure just keeps the
    // placeholder.
    let headcount = LocalResource::new(|| crate::net::api::fetch_user_count());

    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="dashboard">
                    <h1 class="dashboard__greeting">
                        {move || format!("Welcome back, {}", session.get().display_name())}
                    </h1>
                    <div class="dashboard__cards">
                        <div class="stat-card">
                            <span class="stat-card__label">"Total employees"</span>
                            <span class="stat-card__value">
                                {move || format_headcount(headcount.get().flatten())}
                            </span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Your department"</span>
                            <span class="stat-card__value">
                                {move || {
                                    session
                                        .get()
                                        .user
                                        .and_then(|u| u.department)
                                        .unwrap_or_else(|| "—".to_owned())
                                }}
                            </span>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}
