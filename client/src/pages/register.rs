//! Student self-registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::net::types::{Registration, Role};

pub(crate) const MISSING_FIELDS: &str = "Semua kolom wajib diisi.";
pub(crate) const REGISTERED: &str = "Registrasi berhasil! Anda akan diarahkan ke halaman login.";

/// Build a student registration from raw form values.
pub(crate) fn validate_registration(
    nama_lengkap: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let (nama_lengkap, username, email) = (nama_lengkap.trim(), username.trim(), email.trim());
    if nama_lengkap.is_empty() || username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Registration {
        nama_lengkap: nama_lengkap.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        peran: Role::Student,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiConfig>());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let nama_lengkap = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match validate_registration(
            &nama_lengkap.get_untracked(),
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(r) => r,
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
                match crate::net::api::register(&api.get_value(), &registration).await {
                    Ok(_) => {
                        busy.set(false);
                        crate::util::dialog::alert(REGISTERED);
                        navigate("/login", leptos_router::NavigateOptions::default());
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
            let _ = (registration, api);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Buat Akun Baru"</h1>
                <p class="auth-card__subtitle">"Daftar sebagai siswa di platform SAGE."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="nama-lengkap">"Nama Lengkap"</label>
                    <input
                        id="nama-lengkap"
                        class="auth-form__input"
                        type="text"
                        placeholder="Nama Anda"
                        prop:value=move || nama_lengkap.get()
                        on:input=move |ev| nama_lengkap.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="anda@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">"Password"</label>
                    <div class="auth-form__password">
                        <input
                            id="password"
                            class="auth-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__reveal"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Sembunyikan" } else { "Tampilkan" }}
                        </button>
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Mendaftar..." } else { "Daftar Akun" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Sudah punya akun? "
                    <a href="/login">"Login di sini"</a>
                </p>
            </div>
        </main>
    }
}
