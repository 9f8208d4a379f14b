//! Left navigation sidebar.

use leptos::prelude::*;

/// Static section links; the router highlights nothing fancy here, the
/// pages themselves gate access.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <a class="sidebar__link" href="/">
                "Dashboard"
            </a>
            <a class="sidebar__link" href="/employees">
                "Employees"
            </a>
        </nav>
    }
}
