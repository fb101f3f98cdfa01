use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use any_spawner::Executor;
use leptos::reactive::owner::Owner;
use serde_json::json;
use tokio::task::LocalSet;

use super::*;
use crate::util::session::unsigned_token;
use crate::util::token_store::MemoryTokenStore;

fn token_for(role: &str) -> String {
    unsigned_token(&json!({ "user_id": "u1", "peran": role }))
}

/// Let spawned effects observe the latest signal writes.
async fn settle() {
    for _ in 0..4 {
        Executor::tick().await;
    }
}

/// Mounts a guard's decision + redirect effect and returns the redirect counter.
fn mount<P: RoutePolicy>(policy: P, auth: AuthContext) -> (Memo<GuardDecision>, Rc<Cell<usize>>) {
    let redirects = Rc::new(Cell::new(0));
    let counter = Rc::clone(&redirects);
    let decision = guard_decision(policy, auth);
    on_redirect(decision, move || counter.set(counter.get() + 1));
    (decision, redirects)
}

#[tokio::test]
async fn teacher_on_superadmin_route_redirects_exactly_once() {
    let _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let (auth, decision, redirects) = owner.with(|| {
                let auth = AuthContext::new(Arc::new(MemoryTokenStore::with_token(token_for("teacher"))));
                let (decision, redirects) = mount(SuperadminOnly, auth);
                (auth, decision, redirects)
            });

            settle().await;
            assert_eq!(decision.get_untracked(), GuardDecision::Loading);
            assert_eq!(redirects.get(), 0);

            owner.with(|| auth.initialize());
            settle().await;
            assert_eq!(decision.get_untracked(), GuardDecision::Redirect);
            assert_eq!(redirects.get(), 1);

            // Same role again, then a sign-out: still denied, no second redirect.
            owner.with(|| {
                auth.login(&token_for("teacher")).unwrap();
            });
            settle().await;
            owner.with(|| auth.logout());
            settle().await;
            assert_eq!(redirects.get(), 1);
        })
        .await;
}

#[tokio::test]
async fn loading_and_allowed_roles_never_redirect() {
    let _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let (auth, decision, redirects) = owner.with(|| {
                let auth = AuthContext::new(Arc::new(MemoryTokenStore::with_token(token_for("superadmin"))));
                let (decision, redirects) = mount(TeacherOrSuperadmin, auth);
                (auth, decision, redirects)
            });

            settle().await;
            assert_eq!(redirects.get(), 0);

            owner.with(|| auth.initialize());
            settle().await;
            assert_eq!(decision.get_untracked(), GuardDecision::Render);

            owner.with(|| {
                auth.login(&token_for("teacher")).unwrap();
            });
            settle().await;
            assert_eq!(decision.get_untracked(), GuardDecision::Render);
            assert_eq!(redirects.get(), 0);
        })
        .await;
}

#[tokio::test]
async fn access_lost_after_render_redirects_once() {
    let _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let (auth, redirects) = owner.with(|| {
                let auth = AuthContext::new(Arc::new(MemoryTokenStore::with_token(token_for("teacher"))));
                let (_, redirects) = mount(TeacherOrSuperadmin, auth);
                (auth, redirects)
            });

            owner.with(|| auth.initialize());
            settle().await;
            assert_eq!(redirects.get(), 0);

            owner.with(|| auth.logout());
            settle().await;
            owner.with(|| auth.logout());
            settle().await;
            assert_eq!(redirects.get(), 1);
        })
        .await;
}
