//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastArea;
use crate::pages::{dashboard::DashboardPage, employees::EmployeesPage, login::LoginPage, signup::SignupPage};
use crate::state::notify::NotifyState;
use crate::state::roster::RosterState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, kicks off the one-time session
/// restoration, and sets up client-side routing. The session signal has
/// exactly one writer (`net::session_client`); everything below reads.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notify = RwSignal::new(NotifyState::default());
    let roster = RwSignal::new(RosterState::default());

    provide_context(session);
    provide_context(notify);
    provide_context(roster);

    // Restore the persisted session exactly once at startup; route
    // guards hold their decisions until this resolves `loading`.
    let restored = StoredValue::new(false);
    Effect::new(move || {
        if restored.get_value() {
            return;
        }
        restored.set_value(true);
        crate::net::session_client::restore_on_startup(session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/staffboard.css"/>
        <Title text="Staffboard"/>

        <Router>
            <ToastArea/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("employees") view=EmployeesPage/>
            </Routes>
        </Router>
    }
}
