//! Top navigation bar with the current-user menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::session_client;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Navbar: brand, page title slot, and the session menu.
///
/// An authenticated session always has something to show here: the
/// avatar falls back to claims-derived initials while no profile is
/// loaded.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session_client::logout(session, notify);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Staffboard"
            </a>
            <div class="navbar__spacer"></div>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a class="navbar__login-link" href="/login">
                            "Sign in"
                        </a>
                    }
                }
            >
                <div class="navbar__user">
                    {move || {
                        let state = session.get();
                        let avatar = state.user.as_ref().and_then(|u| u.image_url.clone());
                        match avatar {
                            Some(url) => {
                                view! { <img class="navbar__avatar" src=url alt="avatar"/> }.into_any()
                            }
                            None => {
                                view! { <span class="navbar__avatar navbar__avatar--initials">{state.initials()}</span> }
                                    .into_any()
                            }
                        }
                    }}
                    <span class="navbar__name">{move || session.get().display_name()}</span>
                    <button class="btn navbar__logout" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </div>
            </Show>
        </header>
    }
}
