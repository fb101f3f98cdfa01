//! Teacher class management: list the caller's classes and create new ones.

#[cfg(test)]
#[path = "teacher_classes_test.rs"]
mod teacher_classes_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::components::route_guard::TeacherGuard;
use crate::net::config::ApiConfig;
use crate::net::types::{Class, NewClass};
use crate::state::auth::AuthContext;

pub(crate) const MISSING_NAME: &str = "Nama kelas wajib diisi.";
pub(crate) const CLASS_CREATED: &str = "Kelas berhasil dibuat!";
pub(crate) const EMPTY_LIST: &str = "Anda belum memiliki kelas.";

/// Require a class name; the description may be empty.
pub(crate) fn validate_new_class(nama_kelas: &str, deskripsi: &str) -> Result<NewClass, &'static str> {
    let nama_kelas = nama_kelas.trim();
    if nama_kelas.is_empty() {
        return Err(MISSING_NAME);
    }
    Ok(NewClass { nama_kelas: nama_kelas.to_owned(), deskripsi: deskripsi.trim().to_owned() })
}

#[component]
pub fn TeacherClassesPage() -> impl IntoView {
    view! {
        <TeacherGuard>
            <AppLayout>
                <ClassesPanel/>
            </AppLayout>
        </TeacherGuard>
    }
}

#[component]
fn ClassesPanel() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let api = StoredValue::new(expect_context::<ApiConfig>());

    let classes = RwSignal::new(Vec::<Class>::new());
    let fetch_error = RwSignal::new(None::<String>);
    let fetching = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);

    let show_form = RwSignal::new(false);
    let nama_kelas = RwSignal::new(String::new());
    let deskripsi = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move || {
        let token = auth.token();
        reload.track();
        fetching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_classes(&api.get_value(), token.as_deref()).await {
                Ok(list) => {
                    classes.set(list);
                    fetch_error.set(None);
                }
                Err(e) => {
                    log::warn!("class list failed: {e}");
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
        let class = match validate_new_class(&nama_kelas.get_untracked(), &deskripsi.get_untracked()) {
            Ok(c) => c,
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
            match crate::net::api::create_class(&api.get_value(), token.as_deref(), &class).await {
                Ok(_) => {
                    crate::util::dialog::alert(CLASS_CREATED);
                    nama_kelas.set(String::new());
                    deskripsi.set(String::new());
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
        let _ = class;
    };

    view! {
        <section class="panel">
            <div class="panel__header">
                <h1>"Manajemen Kelas Anda"</h1>
                <button class="btn btn--primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Batal" } else { "+ Buat Kelas Baru" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="panel__form" on:submit=on_submit>
                    <h2>"Form Kelas Baru"</h2>
                    <label class="panel__label" for="nama-kelas">"Nama Kelas"</label>
                    <input
                        id="nama-kelas"
                        class="panel__input"
                        type="text"
                        prop:value=move || nama_kelas.get()
                        on:input=move |ev| nama_kelas.set(event_target_value(&ev))
                    />
                    <label class="panel__label" for="deskripsi">"Deskripsi"</label>
                    <textarea
                        id="deskripsi"
                        class="panel__input"
                        rows="3"
                        prop:value=move || deskripsi.get()
                        on:input=move |ev| deskripsi.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="panel__error">{move || form_error.get()}</p>
                    </Show>
                    <button class="btn btn--success" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Menyimpan..." } else { "Simpan Kelas" }}
                    </button>
                </form>
            </Show>

            <h2>"Daftar Kelas"</h2>
            {move || {
                if fetching.get() {
                    return view! { <p class="panel__status">"Loading..."</p> }.into_any();
                }
                if let Some(message) = fetch_error.get() {
                    return view! { <p class="panel__error">{message}</p> }.into_any();
                }
                let list = classes.get();
                if list.is_empty() {
                    return view! { <p class="panel__status">{EMPTY_LIST}</p> }.into_any();
                }
                view! {
                    <div class="class-list">
                        {list
                            .into_iter()
                            .map(|class| {
                                view! {
                                    <article class="class-card">
                                        <h3 class="class-card__title">{class.nama_kelas}</h3>
                                        <p class="class-card__desc">{class.deskripsi.unwrap_or_default()}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
