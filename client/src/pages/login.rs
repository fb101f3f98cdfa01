//! Login page: email/username + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::state::auth::AuthContext;

pub(crate) const MISSING_FIELDS: &str = "Masukkan email/username dan password.";

/// Trim the identifier and require both fields.
pub(crate) fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let api = StoredValue::new(expect_context::<ApiConfig>());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (identifier_value, password_value) =
            match validate_login_input(&identifier.get_untracked(), &password.get_untracked()) {
                Ok(fields) => fields,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = api.get_value();
                let result = crate::net::api::login(&config, &identifier_value, &password_value)
                    .await
                    .and_then(|token| auth.login(&token).map_err(Into::into));
                match result {
                    Ok(user) => {
                        busy.set(false);
                        navigate(crate::util::auth::home_path(user.role), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier_value, password_value, api, auth);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Masuk ke SAGE"</h1>
                <p class="auth-card__subtitle">"Gunakan email atau username Anda."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="identifier">"Email atau Username"</label>
                    <input
                        id="identifier"
                        class="auth-form__input"
                        type="text"
                        placeholder="anda@email.com"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Memproses..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Belum punya akun? "
                    <a href="/register">"Daftar di sini"</a>
                </p>
            </div>
        </main>
    }
}
