//! Toast notification area.
//!
//! Renders the `NotifyState` queue in a fixed corner stack. Toasts are
//! transient: each dismisses itself after a few seconds, or sooner via
//! its close button. Never a blocking dialog.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastKind};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Fixed-position stack of queued toasts.
#[component]
pub fn ToastArea() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-area">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        schedule_dismiss(notify, id);
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast--success",
                            ToastKind::Warning => "toast--warning",
                            ToastKind::Error => "toast--error",
                        };
                        view! {
                            <div class=format!("toast {kind_class}") role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| {
                                        notify.update(|n| n.dismiss(id));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Drop the toast after a short delay; duplicate timers are harmless
/// because dismissal is idempotent.
fn schedule_dismiss(notify: RwSignal<NotifyState>, id: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(AUTO_DISMISS_MS))).await;
            notify.update(|n| n.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notify, id);
    }
}
