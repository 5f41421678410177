//! Profile page: view and edit the signed-in user's record.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::types::{AccountType, User, UserPatch};
use crate::routes::AppRoute;
use crate::state::session::AppSession;
use crate::util::form::{non_blank, parse_list};

pub(crate) const NAME_REQUIRED: &str = "Full name cannot be empty.";
pub(crate) const NOTHING_CHANGED: &str = "Nothing to save.";
pub(crate) const SAVED: &str = "Profile saved.";

/// Editable profile fields as raw input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileForm {
    pub full_name: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub education: String,
    pub specializations: String,
}

impl ProfileForm {
    pub(crate) fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone: user.phone.clone(),
            country: user.country.clone(),
            city: user.city.clone(),
            education: user.education.clone().unwrap_or_default(),
            specializations: user.specializations.join(", "),
        }
    }
}

fn changed(current: &str, edited: &str) -> Option<String> {
    let edited = edited.trim();
    (edited != current).then(|| edited.to_owned())
}

/// Diff the form against `current` into a patch carrying only changes.
///
/// # Errors
///
/// Returns a user-facing message when the form is invalid or unchanged.
pub(crate) fn build_patch(current: &User, form: &ProfileForm) -> Result<UserPatch, &'static str> {
    if non_blank(&form.full_name).is_none() {
        return Err(NAME_REQUIRED);
    }
    let mut patch = UserPatch {
        full_name: changed(&current.full_name, &form.full_name),
        phone: changed(&current.phone, &form.phone),
        country: changed(&current.country, &form.country),
        city: changed(&current.city, &form.city),
        ..UserPatch::default()
    };
    match current.account_type {
        AccountType::Agronomist => {
            patch.education = changed(current.education.as_deref().unwrap_or_default(), &form.education);
            let specializations = parse_list(&form.specializations);
            if specializations != current.specializations {
                patch.specializations = Some(specializations);
            }
        }
        AccountType::Farmer => {}
    }
    if patch.is_empty() { Err(NOTHING_CHANGED) } else { Ok(patch) }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = session.watch();
    let form = RwSignal::new(ProfileForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the form from the session once the user is known.
    {
        let auth = auth.clone();
        Effect::new(move || {
            if let Some(user) = auth.with(|s| s.user.clone()) {
                form.set(ProfileForm::from_user(&user));
            }
        });
    }

    let is_agronomist = {
        let auth = auth.clone();
        move || auth.with(|s| s.user.as_ref().is_some_and(|u| u.account_type == AccountType::Agronomist))
    };
    let email = {
        let auth = auth.clone();
        move || auth.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())
    };
    let role = move || auth.with(|s| s.user.as_ref().map(|u| u.account_type.label()).unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = session.watch().with_untracked(|s| s.user.clone()) else {
            return;
        };
        let patch = match form.with_untracked(|f| build_patch(&current, f)) {
            Ok(patch) => patch,
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
                // SessionExpired signs out; the route guard takes over from there.
                match session.update_current_user(&patch).await {
                    Ok(_) => info.set(SAVED.to_owned()),
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = patch;
        }
    };

    let text_input = move |label: &'static str, get: fn(&ProfileForm) -> &String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="profile-field">
                <span>{label}</span>
                <input
                    class="profile-input"
                    type="text"
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="profile-page">
            <NavBar active=AppRoute::Profile/>
            <main class="profile-page__body">
                <h1>"Profile"</h1>
                <p class="profile-page__meta">{email} " · " {role}</p>
                <form class="profile-form" on:submit=on_submit>
                    {text_input("Full name", |f| &f.full_name, |f, v| f.full_name = v)}
                    {text_input("Phone", |f| &f.phone, |f, v| f.phone = v)}
                    {text_input("Country", |f| &f.country, |f, v| f.country = v)}
                    {text_input("City", |f| &f.city, |f, v| f.city = v)}
                    <Show when=is_agronomist>
                        {text_input("Education", |f| &f.education, |f, v| f.education = v)}
                        {text_input("Specializations (comma separated)", |f| &f.specializations, |f, v| f.specializations = v)}
                    </Show>
                    <button class="btn profile-form__save" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="profile-page__message">{move || info.get()}</p>
                </Show>
            </main>
        </div>
    }
}
