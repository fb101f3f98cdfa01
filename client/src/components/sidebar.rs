//! Role-dependent navigation.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthContext;
use crate::util::auth::nav_links;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"SAGE LMS"</h1>
            </div>
            <nav class="sidebar__nav">
                <h2 class="sidebar__section">"Menu"</h2>
                {move || {
                    let mut section = "Menu";
                    nav_links(auth.role())
                        .into_iter()
                        .map(|link| {
                            let heading = (link.section != section).then_some(link.section);
                            section = link.section;
                            view! {
                                {heading.map(|h| view! { <h2 class="sidebar__section">{h}</h2> })}
                                <a href=link.href class="sidebar__link">{link.label}</a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || auth.role() == Some(Role::Student)>
                    <p class="sidebar__placeholder">"Menu siswa akan ada di sini"</p>
                </Show>
            </nav>
        </aside>
    }
}
