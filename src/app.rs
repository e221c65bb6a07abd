//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, protected_route::ProtectedRoute, toast::Toast};
use crate::config::AppConfig;
use crate::net::api::VisaApi;
use crate::net::identity::IdentityProvider;
use crate::net::identity_firebase::FirebaseIdentity;
use crate::pages::{
    add_visa::AddVisaPage, all_visas::AllVisasPage, auth_callback::AuthCallbackPage, home::HomePage,
    login::LoginPage, my_applications::MyApplicationsPage, my_visas::MyVisasPage, not_found::NotFoundPage,
    register::RegisterPage, visa_details::VisaDetailsPage,
};
use crate::state::auth::SessionStore;
use crate::state::notice::NoticeState;
use crate::util::auth::install_session_signal;

/// Root application component.
///
/// Renders a configuration error screen instead of the router when the
/// build-time configuration is unusable.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match AppConfig::from_build_env() {
        Ok(config) => view! { <ConfiguredApp config/> }.into_any(),
        Err(e) => {
            log::error!("configuration error: {e}");
            view! { <ConfigErrorPage message=e.to_string()/> }.into_any()
        }
    }
}

/// Installs the session store, REST client and notice contexts, then routes.
#[component]
fn ConfiguredApp(config: AppConfig) -> impl IntoView {
    let provider: Arc<dyn IdentityProvider> = Arc::new(FirebaseIdentity::new(config.identity.clone()));
    let store = SessionStore::new(provider);
    let session = install_session_signal(&store);

    let restoring = store.clone();
    leptos::task::spawn_local(async move { restoring.restore().await });

    provide_context(store);
    provide_context(session);
    provide_context(VisaApi::new(config.server_url));
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Title text="Visa Navigator"/>

        <Router>
            <Navbar/>
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                    <Route
                        path=StaticSegment("all-visas")
                        view=|| view! { <ProtectedRoute><AllVisasPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("visa-details"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><VisaDetailsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("add-visa")
                        view=|| view! { <ProtectedRoute><AddVisaPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("my-added-visas")
                        view=|| view! { <ProtectedRoute><MyVisasPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("my-applications")
                        view=|| view! { <ProtectedRoute><MyApplicationsPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Footer/>
            <Toast/>
        </Router>
    }
}

#[component]
fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <Title text="Visa Navigator: configuration error"/>
        <section class="config-error">
            <h1>"Configuration error"</h1>
            <p>{message}</p>
            <p>"Set the required VISA_* variables and rebuild the bundle."</p>
        </section>
    }
}
