//! Landing page with a backend connectivity check.

use leptos::prelude::*;

use crate::net::config::ApiConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiConfig>());
    let hello = LocalResource::new(move || {
        let config = api.get_value();
        async move { crate::net::api::fetch_hello(&config).await }
    });

    view! {
        <main class="home-page">
            <h1>"Automatic Essay Scoring System"</h1>
            <p class="home-page__status">
                <Suspense fallback=move || view! { "Loading..." }>
                    {move || {
                        hello
                            .get()
                            .map(|result| match result {
                                Ok(message) => format!("Message from backend: \"{message}\""),
                                Err(e) => format!("Error: {e}"),
                            })
                    }}
                </Suspense>
            </p>
            <nav class="home-page__links">
                <a class="btn btn--primary" href="/login">"Login"</a>
                <a class="btn" href="/register">"Daftar"</a>
            </nav>
        </main>
    }
}
