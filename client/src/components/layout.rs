//! Dashboard chrome shared by the signed-in pages.

use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar/>
            <div class="app-layout__body">
                <Header/>
                <main class="app-layout__main">{children()}</main>
            </div>
        </div>
    }
}
