//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::session::{AuthService, CookieStore, DASHBOARD_ROUTE, DocumentCookies, RouteGate, SessionStore, SharedAuth, SystemClock};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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

/// Session service over whichever cookie surface this render can see: the
/// incoming request headers during SSR, `document.cookie` in the browser.
fn ambient_auth() -> SharedAuth {
    #[cfg(feature = "ssr")]
    {
        if let Some(parts) = use_context::<http::request::Parts>() {
            let medium = crate::session::RequestCookies::from_headers(&parts.headers);
            let store: Arc<dyn SessionStore> = Arc::new(CookieStore::new(medium, SystemClock));
            return AuthService::new(store);
        }
    }
    let store: Arc<dyn SessionStore> = Arc::new(CookieStore::new(DocumentCookies, SystemClock));
    AuthService::new(store)
}

/// Root application component.
///
/// Provides the session service and sets up routing. `/dashboard` sits
/// behind the route gate; `/` forwards to it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = ambient_auth();
    provide_context(auth.clone());

    let gate = RouteGate::default();
    let condition = move || Some(gate.evaluate(&auth).is_allowed());

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>
        <Title text="Gatehouse"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ProtectedRoute
                        path=StaticSegment("dashboard")
                        view=DashboardPage
                        condition=condition
                        redirect_path=move || gate.login_route()
                    />
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_ROUTE/> }/>
                </Routes>
            </main>
        </Router>
    }
}
