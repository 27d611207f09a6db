//! Navigation Bar Component
//!
//! App title, links to the protected screens and the signed-in user with a
//! sign-out button. The user-management link is only shown to admins.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let link_class = move |route: Route| {
        move || {
            if ctx.resolve(ctx.route.get()) == route { "nav-link active" } else { "nav-link" }
        }
    };

    view! {
        <header class="navbar">
            <span class="navbar-title">"The ToDo App"</span>
            <nav class="navbar-links">
                <a
                    href=Route::Dashboard.path()
                    class=link_class(Route::Dashboard)
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::Dashboard);
                    }
                >
                    "Dashboard"
                </a>
                <Show when=move || ctx.is_admin()>
                    <a
                        href=Route::UserManagement.path()
                        class=link_class(Route::UserManagement)
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Route::UserManagement);
                        }
                    >
                        "User Management"
                    </a>
                </Show>
            </nav>
            <div class="navbar-user">
                <span class="navbar-user-name">{move || ctx.user_name()}</span>
                <span class="navbar-user-email">{move || ctx.user_email()}</span>
                <button class="btn signout-btn" on:click=move |_| ctx.sign_out()>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
