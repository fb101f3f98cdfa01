//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::{API_URL_META, ApiConfig};
use crate::pages::{
    admin_teachers::AdminTeachersPage, home::HomePage, login::LoginPage, register::RegisterPage,
    teacher_classes::TeacherClassesPage,
};
use crate::state::auth::AuthContext;
use crate::util::token_store::LocalTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Writes the host's [`ApiConfig`] into a `<meta>` tag for the client.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api = use_context::<ApiConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api.base_url().to_owned()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API location and the session context, restores any stored
/// session once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api);

    let auth = AuthContext::new(Arc::new(LocalTokenStore));
    provide_context(auth);

    // Effects only run in the browser, where the token store is real.
    Effect::new(move || auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/sage.css"/>
        <Title text="SAGE LMS"/>

        <Router>
            <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("teachers")) view=AdminTeachersPage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("teacher"), StaticSegment("classes"))
                    view=TeacherClassesPage
                />
            </Routes>
        </Router>
    }
}
