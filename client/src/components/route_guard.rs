//! Role-gated wrappers for route content.
//!
//! Both guards share one implementation parameterized by a [`RoutePolicy`].
//! The decision is memoized, so the redirect effect only re-runs when the
//! decision itself changes; `redirect_due` then acts only on the step into
//! `Redirect`.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::auth::{
    FALLBACK_PATH, GuardDecision, RoutePolicy, SuperadminOnly, TeacherOrSuperadmin, decide, redirect_due,
};
use crate::util::dialog;

/// Renders `children` only for superadmins.
#[component]
pub fn SuperadminGuard(children: ChildrenFn) -> impl IntoView {
    guarded(SuperadminOnly, children)
}

/// Renders `children` for teachers and superadmins.
#[component]
pub fn TeacherGuard(children: ChildrenFn) -> impl IntoView {
    guarded(TeacherOrSuperadmin, children)
}

pub(crate) fn guard_decision<P: RoutePolicy>(policy: P, auth: AuthContext) -> Memo<GuardDecision> {
    Memo::new(move |_| decide(policy, &auth.get()))
}

/// Run `redirect` each time `decision` steps into `Redirect`.
pub(crate) fn on_redirect(decision: Memo<GuardDecision>, redirect: impl Fn() + 'static) {
    Effect::new(move |previous: Option<GuardDecision>| {
        let next = decision.get();
        if redirect_due(previous, next) {
            redirect();
        }
        next
    });
}

fn guarded<P: RoutePolicy>(policy: P, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let decision = guard_decision(policy, auth);

    on_redirect(decision, move || {
        log::info!("route guard redirecting to {FALLBACK_PATH}");
        dialog::alert(policy.denied_message());
        navigate(FALLBACK_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="guard-loading">
                <p>{policy.loading_text()}</p>
            </div>
        }
        .into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect => ().into_any(),
    }
}
