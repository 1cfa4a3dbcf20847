//! Profile view and edit form.
//!
//! Profile edits go to the server only; the session's cached user record is
//! refreshed from the response in memory and persisted storage is left to
//! the session lifecycle.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::UpdateProfileRequest;

fn profile_form_error(username: &str, phone: &str) -> Option<String> {
    if username.trim().is_empty() {
        return Some("Username is required.".to_owned());
    }
    if phone.trim().is_empty() {
        return Some("Phone is required.".to_owned());
    }
    None
}

fn optional_field(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let business_name = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let role_label = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profile(&client).await {
                Ok(user) => {
                    username.set(user.username);
                    email.set(user.email);
                    phone.set(user.phone);
                    bio.set(user.bio);
                    business_name.set(user.business_name.unwrap_or_default());
                    image_url.set(user.image_url.unwrap_or_default());
                    role_label.set(user.role.as_str().to_owned());
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &client;
    }

    let on_save = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            if let Some(message) = profile_form_error(&username.get(), &phone.get()) {
                error.set(message);
                return;
            }
            error.set(String::new());
            saved.set(false);
            busy.set(true);

            let request = UpdateProfileRequest {
                username: username.get_untracked().trim().to_owned(),
                phone: phone.get_untracked().trim().to_owned(),
                bio: bio.get_untracked().trim().to_owned(),
                business_name: optional_field(&business_name.get_untracked()),
                image_url: optional_field(&image_url.get_untracked()),
            };

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_profile(&client, &request).await {
                        Ok(user) => {
                            username.set(user.username);
                            phone.set(user.phone);
                            bio.set(user.bio);
                            business_name.set(user.business_name.unwrap_or_default());
                            image_url.set(user.image_url.unwrap_or_default());
                            saved.set(true);
                        }
                        Err(err) => error.set(err.to_string()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, request);
            }
        }
    };

    view! {
        <main class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__role">{move || role_label.get()}</p>
            <p class="profile-page__email">{move || email.get()}</p>
            <Show when=move || !error.get().is_empty()>
                <p class="profile-page__error">{move || error.get()}</p>
            </Show>
            <Show when=move || saved.get()>
                <p class="profile-page__saved">"Profile updated."</p>
            </Show>
            <form class="profile-page__form" on:submit=on_save>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="tel"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Business name (optional)"
                    prop:value=move || business_name.get()
                    on:input=move |ev| business_name.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="url"
                    placeholder="Image URL (optional)"
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Bio"
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </main>
    }
}
