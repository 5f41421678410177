//! Registration page. Agronomists additionally provide education and
//! specializations.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::{AccountType, Registration};
use crate::routes::AppRoute;
use crate::state::session::AppSession;
use crate::util::form::{non_blank, normalize_email, parse_list, validate_new_password};

pub(crate) const NAME_REQUIRED: &str = "Enter your full name.";
pub(crate) const LOCATION_REQUIRED: &str = "Enter your country and city.";
pub(crate) const SPECIALIZATION_REQUIRED: &str = "Agronomists must list at least one specialization.";

/// Raw registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub full_name: String,
    pub account_type: AccountType,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub education: String,
    pub specializations: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            full_name: String::new(),
            account_type: AccountType::Farmer,
            phone: String::new(),
            country: String::new(),
            city: String::new(),
            education: String::new(),
            specializations: String::new(),
        }
    }
}

/// Validate the form and build the request body.
///
/// Agronomist-only fields are dropped for farmers.
///
/// # Errors
///
/// Returns the first problem as a user-facing message.
pub(crate) fn build_registration(form: &RegistrationForm) -> Result<Registration, &'static str> {
    let email = normalize_email(&form.email)?;
    validate_new_password(&form.password, &form.confirm)?;
    let full_name = non_blank(&form.full_name).ok_or(NAME_REQUIRED)?;
    let (Some(country), Some(city)) = (non_blank(&form.country), non_blank(&form.city)) else {
        return Err(LOCATION_REQUIRED);
    };

    let (education, specializations) = match form.account_type {
        AccountType::Farmer => (None, Vec::new()),
        AccountType::Agronomist => {
            let specializations = parse_list(&form.specializations);
            if specializations.is_empty() {
                return Err(SPECIALIZATION_REQUIRED);
            }
            (non_blank(&form.education), specializations)
        }
    };

    Ok(Registration {
        email,
        password: form.password.clone(),
        full_name,
        account_type: form.account_type,
        phone: form.phone.trim().to_owned(),
        country,
        city,
        education,
        specializations,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let form = RwSignal::new(RegistrationForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let is_agronomist = move || form.with(|f| f.account_type == AccountType::Agronomist);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match form.with_untracked(build_registration) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.register(&registration).await {
                    leptos::logging::warn!("registration failed: {e}");
                    info.set(e.user_message());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, registration);
        }
    };

    let text_input = move |label: &'static str, kind: &'static str, get: fn(&RegistrationForm) -> &String, set: fn(&mut RegistrationForm, String)| {
        view! {
            <label class="auth-field">
                <span>{label}</span>
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span>"I am a"</span>
                        <select
                            class="auth-input"
                            on:change=move |ev| {
                                if let Some(kind) = AccountType::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.account_type = kind);
                                }
                            }
                        >
                            {AccountType::ALL
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <option
                                            value=kind.as_str()
                                            selected=move || form.with(|f| f.account_type == kind)
                                        >
                                            {kind.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {text_input("Full name", "text", |f| &f.full_name, |f, v| f.full_name = v)}
                    {text_input("Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {text_input("Password", "password", |f| &f.password, |f, v| f.password = v)}
                    {text_input("Confirm password", "password", |f| &f.confirm, |f, v| f.confirm = v)}
                    {text_input("Phone", "tel", |f| &f.phone, |f, v| f.phone = v)}
                    {text_input("Country", "text", |f| &f.country, |f, v| f.country = v)}
                    {text_input("City", "text", |f| &f.city, |f, v| f.city = v)}
                    <Show when=is_agronomist>
                        {text_input("Education", "text", |f| &f.education, |f, v| f.education = v)}
                        {text_input(
                            "Specializations (comma separated)",
                            "text",
                            |f| &f.specializations,
                            |f, v| f.specializations = v,
                        )}
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href=AppRoute::Login.path()>"Already have an account? Log in"</a>
                </div>
            </div>
        </div>
    }
}
