//! Signup page: registration form against `POST /users/create`.
//!
//! Field rules mirror the backend's expectations; validation happens in
//! one pure function so every rule tests natively.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::RegistrationPayload;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Raw form values as typed, before validation.
#[derive(Clone, Debug, Default)]
struct SignupInput {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    mobile_number: String,
    date_of_birth: String,
    department_uuid: String,
    role_uuid: String,
}

/// Check every field and assemble the registration payload.
fn validate_signup(input: &SignupInput) -> Result<RegistrationPayload, &'static str> {
    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();
    if first_name.len() < 3 || last_name.len() < 3 {
        return Err("Names must be at least 3 characters.");
    }
    let email = input.email.trim();
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if input.password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if input.password != input.confirm_password {
        return Err("Passwords don't match.");
    }
    let mobile_number = input.mobile_number.trim();
    if mobile_number.len() < 5 {
        return Err("Please enter a valid phone number.");
    }
    if input.date_of_birth.trim().is_empty() {
        return Err("Please select a date of birth.");
    }
    if input.department_uuid.is_empty() || input.role_uuid.is_empty() {
        return Err("Please select a department and a role.");
    }
    Ok(RegistrationPayload {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password_hash: input.password.clone(),
        lang_key: "en".to_owned(),
        mobile_number: mobile_number.to_owned(),
        date_of_birth: input.date_of_birth.trim().to_owned(),
        department_uuid: input.department_uuid.clone(),
        role_uuid: input.role_uuid.clone(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let input = RwSignal::new(SignupInput::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Selectable options come from the backend; an unreachable backend
    // leaves the selects empty rather than blocking the page.
    let roles = LocalResource::new(|| crate::net::api::fetch_roles());
    let departments = LocalResource::new(|| crate::net::api::fetch_departments());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_signup(&input.get()) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let ok = crate::net::session_client::register_user(session, notify, &payload).await;
                if ok {
                    navigate("/", NavigateOptions::default());
                } else {
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, notify, payload);
            busy.set(false);
        }
    };

    let text_field = move |label: &'static str, kind: &'static str, write: fn(&mut SignupInput, String)| {
        view! {
            <label class="signup__label">
                {label}
                <input
                    class="login-input"
                    type=kind
                    on:input=move |ev| {
                        input.update(|i| write(i, event_target_value(&ev)));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {text_field("First Name", "text", |i, v| i.first_name = v)}
                    {text_field("Last Name", "text", |i, v| i.last_name = v)}
                    {text_field("Email", "email", |i, v| i.email = v)}
                    {text_field("Password", "password", |i, v| i.password = v)}
                    {text_field("Confirm Password", "password", |i, v| i.confirm_password = v)}
                    {text_field("Mobile Number", "tel", |i, v| i.mobile_number = v)}
                    {text_field("Date of Birth", "date", |i, v| i.date_of_birth = v)}
                    <label class="signup__label">
                        "Department"
                        <select
                            class="login-input"
                            on:change=move |ev| {
                                input.update(|i| i.department_uuid = event_target_value(&ev));
                            }
                        >
                            <option value="">"Select a department"</option>
                            {move || {
                                departments
                                    .get()
                                    .flatten()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|d| view! { <option value=d.uuid>{d.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="signup__label">
                        "Role"
                        <select
                            class="login-input"
                            on:change=move |ev| {
                                input.update(|i| i.role_uuid = event_target_value(&ev));
                            }
                        >
                            <option value="">"Select a role"</option>
                            {move || {
                                roles
                                    .get()
                                    .flatten()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|r| view! { <option value=r.uuid>{r.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
