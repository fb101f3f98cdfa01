//! Top bar: theme switcher, current role, logout.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthContext;
use crate::util::dark_mode::{self, Theme};

/// Label shown next to the user icon.
pub fn role_label(role: Option<Role>) -> &'static str {
    role.map_or("Guest", Role::as_str)
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <header class="app-header">
            <div class="app-header__actions">
                <ThemeSwitcher/>
                <div class="app-header__divider"></div>
                <div class="app-header__user">
                    <svg class="app-header__icon" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"></path>
                        <circle cx="12" cy="7" r="4"></circle>
                    </svg>
                    <span class="app-header__role">{move || role_label(auth.role())}</span>
                </div>
                // Guards on the current page take care of navigating away.
                <button class="app-header__logout" on:click=move |_| auth.logout()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}

/// Sun/moon toggle. Renders nothing until mounted so SSR and hydration agree.
#[component]
fn ThemeSwitcher() -> impl IntoView {
    let theme = RwSignal::new(Theme::Light);
    let mounted = RwSignal::new(false);

    Effect::new(move || {
        let stored = dark_mode::read_preference();
        dark_mode::apply(stored);
        theme.set(stored);
        mounted.set(true);
    });

    view! {
        <Show when=move || mounted.get()>
            <button
                class="app-header__theme"
                title=move || theme.get().switch_label()
                on:click=move |_| theme.update(|t| *t = dark_mode::toggle(*t))
            >
                {move || match theme.get() {
                    Theme::Dark => view! {
                        <svg class="app-header__icon" viewBox="0 0 24 24" aria-hidden="true">
                            <circle cx="12" cy="12" r="4"></circle>
                            <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"></path>
                        </svg>
                    }
                    .into_any(),
                    Theme::Light => view! {
                        <svg class="app-header__icon" viewBox="0 0 24 24" aria-hidden="true">
                            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
                        </svg>
                    }
                    .into_any(),
                }}
            </button>
        </Show>
    }
}
