use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::tachys::view::RenderHtml;

use super::*;
use crate::net::identity::IdentityProvider;
use crate::state::auth::SessionStore;
use crate::test_support::{ScriptedProvider, identity};

/// Render the gate once for `session`.
///
/// Returns the HTML and how many times the protected view was built; building
/// it is what would issue the page's data fetch.
fn render(session: Session) -> (String, usize) {
    let owner = Owner::new();
    owner.with(|| {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let children: ChildrenFn = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            view! { <p class="protected">"protected view"</p> }.into_any()
        });
        let session = RwSignal::new(session);

        let html = session_gate(session, children, |target: RedirectTarget| {
            view! { <a class="redirect" href=target.path>"redirect"</a> }.into_any()
        })
        .to_html();

        (html, built.load(Ordering::SeqCst))
    })
}

#[test]
fn initializing_renders_placeholder_only() {
    let (html, built) = render(Session::Initializing);
    assert_eq!(built, 0);
    assert!(html.contains("status--loading"), "{html}");
    assert!(!html.contains("redirect"), "{html}");
}

#[test]
fn unauthenticated_redirects_without_building_the_view() {
    let (html, built) = render(Session::Unauthenticated);
    assert_eq!(built, 0);
    assert!(html.contains("/login"), "{html}");
    assert!(!html.contains("protected view"), "{html}");
}

#[test]
fn authenticated_builds_the_view_once() {
    let (html, built) = render(Session::Authenticated(identity("a@x.com")));
    assert_eq!(built, 1);
    assert!(html.contains("protected view"), "{html}");
}

#[test]
fn signing_out_after_sign_in_withholds_the_view() {
    let provider = ScriptedProvider::new();
    let dyn_provider: Arc<dyn IdentityProvider> = provider.clone();
    let store = SessionStore::new(dyn_provider);
    let _link = store.connect();

    let (_, built) = render(store.current());
    assert_eq!(built, 0);

    provider.emit(Some(identity("a@x.com")));
    provider.emit(None);

    let (_, built) = render(store.current());
    assert_eq!(built, 0);
}
