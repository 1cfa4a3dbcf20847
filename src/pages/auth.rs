//! Combined sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated entry point the route guard redirects to.
//! Sign-in goes through `Session::login` so persistence and in-memory
//! state move together. Sign-up never mutates the session; the user is
//! bounced back to the sign-in form on success.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::state::session::Session;

/// Message shown when registration cannot resolve a device position.
/// Sign-in treats location as optional; sign-up requires it so nearby
/// matching works from day one.
const LOCATION_REQUIRED_MESSAGE: &str = "Location access failed. Please enable location and try again.";

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_registration(username: &str, email: &str, password: &str, phone: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() || phone.trim().is_empty() {
        return Err("All fields are required for registration.");
    }
    Ok(())
}

fn role_from_form(value: &str) -> Role {
    if value == "Supplier" { Role::Supplier } else { Role::Vendor }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Vendor);
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();

    let on_login = {
        let client = client.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            error.set(String::new());
            info.set(String::new());

            let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    // Best effort: sign-in proceeds with or without a position.
                    let location = crate::util::geolocation::current_position().await;
                    match session.login(&client, &email_value, &password_value, location).await {
                        Ok(_) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                        Err(err) => {
                            error.set(err.to_string());
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &navigate, email_value, password_value);
            }
        }
    };

    let on_register = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            error.set(String::new());
            info.set(String::new());

            if let Err(message) = validate_registration(&username.get(), &email.get(), &password.get(), &phone.get()) {
                error.set(message.to_owned());
                return;
            }
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    let Some(position) = crate::util::geolocation::current_position().await else {
                        error.set(LOCATION_REQUIRED_MESSAGE.to_owned());
                        busy.set(false);
                        return;
                    };
                    let request = crate::net::types::RegisterRequest {
                        username: username.get_untracked().trim().to_owned(),
                        email: email.get_untracked().trim().to_owned(),
                        password: password.get_untracked(),
                        phone: phone.get_untracked().trim().to_owned(),
                        role: role.get_untracked(),
                        bio: String::new(),
                        image_url: String::new(),
                        location: Some(position.to_geojson()),
                    };
                    match session.register(&client, &request).await {
                        Ok(response) => {
                            info.set(
                                response
                                    .message
                                    .unwrap_or_else(|| "Account created! Please sign in.".to_owned()),
                            );
                            mode.set(AuthMode::Login);
                            username.set(String::new());
                            phone.set(String::new());
                            password.set(String::new());
                            role.set(Role::Vendor);
                        }
                        Err(err) => error.set(err.to_string()),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, LOCATION_REQUIRED_MESSAGE);
            }
        }
    };

    let toggle_label = move || {
        if mode.get() == AuthMode::Login {
            "Need an account? Sign Up"
        } else {
            "Already have an account? Sign In"
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>{move || if mode.get() == AuthMode::Login { "Welcome Back" } else { "Create an Account" }}</h1>

                <Show when=move || mode.get() == AuthMode::Login>
                    <p class="auth-card__note">"Note: please enable site and device location."</p>
                </Show>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__info">{move || info.get()}</p>
                </Show>

                <Show when=move || mode.get() == AuthMode::Register>
                    <form class="auth-form" on:submit=on_register.clone()>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="tel"
                            placeholder="Phone"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <select
                            class="auth-input"
                            on:change=move |ev| role.set(role_from_form(&event_target_value(&ev)))
                        >
                            <option value="Vendor" selected=move || role.get() == Role::Vendor>
                                "Vendor"
                            </option>
                            <option value="Supplier" selected=move || role.get() == Role::Supplier>
                                "Supplier"
                            </option>
                        </select>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Please wait..." } else { "Sign Up" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || mode.get() == AuthMode::Login>
                    <form class="auth-form" on:submit=on_login.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Please wait..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>

                <button
                    class="auth-card__toggle"
                    on:click=move |_| {
                        error.set(String::new());
                        info.set(String::new());
                        mode.set(if mode.get() == AuthMode::Login { AuthMode::Register } else { AuthMode::Login });
                    }
                >
                    {toggle_label}
                </button>
            </div>
        </main>
    }
}
