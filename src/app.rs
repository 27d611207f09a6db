//! Todo App Frontend
//!
//! Root component: configuration, shared context, path-based routing
//! through the auth gate, and the signed-in layout.

use chrono::Datelike;
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::AppConfig;
use tracing::{debug, warn};

use crate::commands;
use crate::components::{LogPanel, NavBar, Toaster};
use crate::context::AppContext;
use crate::models::Route;
use crate::pages::{
    DashboardPage, NotAuthorizedPage, SignInPage, SignUpPage, UserManagementPage,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        warn!(%err, "falling back to the default API URL");
        AppConfig::default()
    });
    debug!(api = %config.api_base_url, "starting");

    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(&config, Route::from_path(&commands::current_path()), store);
    provide_context(ctx);

    // Back/forward buttons
    let handle = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());
    on_cleanup(move || handle.remove());

    // Route actually shown, after the gate's redirects
    let shown = Memo::new(move |_| ctx.resolve(ctx.route.get()));

    // Keep the location bar in step with redirects
    Effect::new(move |_| {
        let requested = ctx.route.get();
        let target = shown.get();
        if requested != target || commands::current_path() != target.path() {
            debug!(from = requested.path(), to = target.path(), "redirect");
            ctx.redirect(target);
        }
    });

    view! {
        <Toaster />
        {move || match shown.get() {
            Route::SignIn => view! { <SignInPage /> }.into_any(),
            Route::SignUp => view! { <SignUpPage /> }.into_any(),
            route => view! { <Shell route=route /> }.into_any(),
        }}
    }
}

/// Layout of the protected screens
#[component]
fn Shell(route: Route) -> impl IntoView {
    let page = match route {
        Route::UserManagement => view! { <UserManagementPage /> }.into_any(),
        Route::NotAuthorized => view! { <NotAuthorizedPage /> }.into_any(),
        _ => view! { <DashboardPage /> }.into_any(),
    };
    let year = chrono::Local::now().year();

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">{page}</main>
            <footer class="app-footer">
                {format!("© {year} The ToDo App")}
                <LogPanel />
            </footer>
        </div>
    }
}
