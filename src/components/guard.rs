//! Role-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages wrap their content in [`RequireRole`]; the actual
//! decision logic lives in `util::guard` so it stays testable. While the
//! session restores, the wrapper renders a spinner and makes no
//! redirect; a denial notifies exactly once and navigates away.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::guard::{Decision, authorize};

/// Gate children behind the session's role set.
///
/// An empty `roles` list admits any authenticated session.
#[component]
pub fn RequireRole(#[prop(optional)] roles: Vec<&'static str>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let decision = Memo::new(move |_| authorize(&roles, &session.get()));

    // One toast + one redirect per denial instance, however often the
    // view re-renders while leaving.
    let denial_handled = StoredValue::new(false);
    Effect::new(move || {
        if decision.get() == Decision::Deny && !denial_handled.get_value() {
            denial_handled.set_value(true);
            notify.update(|n| {
                n.error("Unauthorized access");
            });
            leave_protected_view();
        }
    });

    view! {
        {move || match decision.get() {
            Decision::Pending => {
                view! {
                    <div class="page-loading" aria-label="Loading">
                        <div class="page-loading__spinner"></div>
                    </div>
                }
                    .into_any()
            }
            Decision::Allow => children(),
            Decision::Deny => ().into_any(),
        }}
    }
}

/// Return to the previous location, or to the login view when there is
/// no history to go back to.
fn leave_protected_view() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                if history.back().is_ok() {
                    return;
                }
            }
            let _ = window.location().set_href("/login");
        }
    }
}
