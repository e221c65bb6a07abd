//! Route wrapper that applies the access guard.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::status::LoadingSpinner;
use crate::state::auth::Session;
use crate::util::auth::{GuardDecision, RedirectTarget, guard_decision};

/// Render `children` only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    session_gate(session, children, |target: RedirectTarget| {
        let options = NavigateOptions { replace: target.replace, ..NavigateOptions::default() };
        view! { <Redirect path=target.path options=options/> }.into_any()
    })
}

/// Switch between the placeholder, `redirect`, and `children` as `session`
/// changes. `children` is invoked only while the session is authenticated.
///
/// The decision is memoized, so identity changes inside `Authenticated` do not
/// remount the protected view.
pub fn session_gate<R>(session: RwSignal<Session>, children: ChildrenFn, redirect: R) -> impl IntoView
where
    R: Fn(RedirectTarget) -> AnyView + Send + Sync + 'static,
{
    let decision = Memo::new(move |_| session.with(guard_decision));

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingSpinner/> }.into_any(),
        GuardDecision::Redirect(target) => redirect(target),
        GuardDecision::Render => children().into_any(),
    }
}
