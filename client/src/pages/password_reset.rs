//! Password reset: request a reset link by email, then set a new password
//! with the token from that link (`/reset-password?token=...`).
//!
//! Both flows are independent of the session; they share only the error
//! surfacing convention.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::{PasswordReset, PasswordResetRequest};
use crate::routes::AppRoute;
use crate::state::session::AppSession;
use crate::util::form::{non_blank, normalize_email, validate_new_password};

pub(crate) const RESET_TOKEN_MISSING: &str = "This reset link is invalid. Request a new one.";
pub(crate) const RESET_REQUESTED: &str = "If an account exists for that email, a reset link is on its way.";
pub(crate) const RESET_DONE: &str = "Your password was changed. You can log in now.";

/// # Errors
///
/// Returns the message to show above the form.
pub(crate) fn build_reset_request(email: &str) -> Result<PasswordResetRequest, &'static str> {
    Ok(PasswordResetRequest { email: normalize_email(email)? })
}

/// # Errors
///
/// Returns the message to show above the form.
pub(crate) fn build_password_reset(
    token: Option<&str>,
    password: &str,
    confirm: &str,
) -> Result<PasswordReset, &'static str> {
    let token = token.and_then(non_blank).ok_or(RESET_TOKEN_MISSING)?;
    validate_new_password(password, confirm)?;
    Ok(PasswordReset { token, new_password: password.to_owned() })
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match build_reset_request(&email.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::CredentialStore as _;

            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.credentials().request_password_reset(&request).await {
                    Ok(()) => {
                        sent.set(true);
                        info.set(RESET_REQUESTED.to_owned());
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, request, sent);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <Show when=move || !sent.get()>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Send reset link"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href=AppRoute::Login.path()>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let query = use_query_map();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token = query.with_untracked(|q| q.get("token"));
        let reset = match build_password_reset(token.as_deref(), &password.get_untracked(), &confirm.get_untracked()) {
            Ok(reset) => reset,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::CredentialStore as _;

            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.credentials().reset_password(&reset).await {
                    Ok(()) => {
                        done.set(true);
                        info.set(RESET_DONE.to_owned());
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, reset, done);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show when=move || !done.get()>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="New password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Repeat new password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Set password"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href=AppRoute::Login.path()>"Back to log in"</a>
                </div>
            </div>
        </div>
    }
}
