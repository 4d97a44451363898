//! Dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. The router only renders it after the
//! route gate allows the navigation, so the page itself does no auth checks.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{LOGIN_ROUTE, SharedAuth};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<SharedAuth>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <button class="auth-button" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <p>"You are signed in."</p>
        </div>
    }
}
