//! Superadmin teacher management: list, add, and delete teacher accounts.

#[cfg(test)]
#[path = "admin_teachers_test.rs"]
mod admin_teachers_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::components::route_guard::SuperadminGuard;
use crate::net::config::ApiConfig;
use crate::net::types::{NewTeacher, Teacher};
use crate::state::auth::AuthContext;

pub(crate) const MISSING_FIELDS: &str = "Semua kolom wajib diisi.";
pub(crate) const TEACHER_ADDED: &str = "Guru berhasil ditambahkan!";
pub(crate) const TEACHER_DELETED: &str = "Guru berhasil dihapus!";
pub(crate) const EMPTY_LIST: &str = "Belum ada guru.";

/// Build a new teacher account from raw form values.
pub(crate) fn validate_new_teacher(
    nama_lengkap: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<NewTeacher, &'static str> {
    let (nama_lengkap, username, email) = (nama_lengkap.trim(), username.trim(), email.trim());
    if nama_lengkap.is_empty() || username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(NewTeacher {
        nama_lengkap: nama_lengkap.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

pub(crate) fn delete_prompt(teacher_name: &str) -> String {
    format!("Apakah Anda yakin ingin menghapus guru {teacher_name}?")
}

pub(crate) fn delete_failure(message: &str) -> String {
    format!("Error menghapus guru: {message}")
}

#[component]
pub fn AdminTeachersPage() -> impl IntoView {
    view! {
        <SuperadminGuard>
            <AppLayout>
                <TeachersPanel/>
            </AppLayout>
        </SuperadminGuard>
    }
}

#[component]
fn TeachersPanel() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let api = StoredValue::new(expect_context::<ApiConfig>());

    let teachers = RwSignal::new(Vec::<Teacher>::new());
    let fetch_error = RwSignal::new(None::<String>);
    let fetching = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);

    let show_form = RwSignal::new(false);
    let nama_lengkap = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move || {
        let token = auth.token();
        reload.track();
        fetching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_teachers(&api.get_value(), token.as_deref()).await {
                Ok(list) => {
                    teachers.set(list);
                    fetch_error.set(None);
                }
                Err(e) => {
                    log::warn!("teacher list failed: {e}");
                    auth.expire_if_unauthorized(&e);
                    fetch_error.set(Some(e.to_string()));
                }
            }
            fetching.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (token, api);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let teacher = match validate_new_teacher(
            &nama_lengkap.get_untracked(),
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(t) => t,
            Err(msg) => {
                form_error.set(msg.to_owned());
                return;
            }
        };
        saving.set(true);
        form_error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token_untracked();
            match crate::net::api::create_teacher(&api.get_value(), token.as_deref(), &teacher).await {
                Ok(_) => {
                    crate::util::dialog::alert(TEACHER_ADDED);
                    for field in [nama_lengkap, username, email, password] {
                        field.set(String::new());
                    }
                    show_form.set(false);
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    auth.expire_if_unauthorized(&e);
                    form_error.set(e.to_string());
                }
            }
            saving.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = teacher;
    };

    let on_delete = move |teacher: Teacher| {
        if !crate::util::dialog::confirm(&delete_prompt(&teacher.nama_lengkap)) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = auth.token_untracked();
            match crate::net::api::delete_teacher(&api.get_value(), token.as_deref(), &teacher.id).await {
                Ok(_) => {
                    crate::util::dialog::alert(TEACHER_DELETED);
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    auth.expire_if_unauthorized(&e);
                    crate::util::dialog::alert(&delete_failure(&e.to_string()));
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = teacher;
    };

    view! {
        <section class="panel">
            <div class="panel__header">
                <h1>"Manajemen Guru"</h1>
                <button class="btn btn--primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Batal" } else { "Tambah Guru" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="panel__form" on:submit=on_submit>
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Nama Lengkap"
                        prop:value=move || nama_lengkap.get()
                        on:input=move |ev| nama_lengkap.set(event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="panel__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="panel__error">{move || form_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Menyimpan..." } else { "Simpan Guru" }}
                    </button>
                </form>
            </Show>

            {move || {
                if fetching.get() && teachers.with(Vec::is_empty) {
                    return view! { <p class="panel__status">"Memuat data guru..."</p> }.into_any();
                }
                if let Some(message) = fetch_error.get() {
                    return view! { <p class="panel__error">{format!("Error: {message}")}</p> }.into_any();
                }
                let list = teachers.get();
                if list.is_empty() {
                    return view! { <p class="panel__status">{EMPTY_LIST}</p> }.into_any();
                }
                view! {
                    <table class="panel__table">
                        <thead>
                            <tr>
                                <th>"Nama Lengkap"</th>
                                <th>"Email"</th>
                                <th>"Username"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|teacher| {
                                    let row = teacher.clone();
                                    view! {
                                        <tr>
                                            <td>{teacher.nama_lengkap}</td>
                                            <td>{teacher.email}</td>
                                            <td>{teacher.username.unwrap_or_else(|| "-".to_owned())}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete(row.clone())
                                                >
                                                    "Hapus"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
