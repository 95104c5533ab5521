//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Login page — email + password form against the backend auth endpoint.
///
/// On success the credential and user are persisted, the session context is
/// established, and the app navigates home. Failures are logged and shown
/// inline; the user stays on this screen.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(auth) => {
                        crate::util::storage::set_token(&auth.token);
                        crate::util::storage::save_user(&auth.user);
                        session.update(|s| s.establish(auth.user));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session);
        }
    });

    view! {
        <div class="auth-page auth-page--login">
            <div class="auth-page__panel">
                <h1 class="auth-page__title">"Welcome back to Searchifi"</h1>
                <p class="auth-page__hint">
                    "Don't have an account? "
                    <a href="/register">"Create a new account"</a>
                </p>

                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        placeholder="********"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                {move || {
                    error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })
                }}

                <button
                    class="btn btn--primary auth-page__submit"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    "Login"
                </button>
            </div>
        </div>
    }
}
