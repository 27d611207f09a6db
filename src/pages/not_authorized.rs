use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Route;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <section class="not-authorized">
            <h2>"Not Authorized"</h2>
            <p>"You do not have permission to view this page."</p>
            <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Dashboard)>
                "Back to Dashboard"
            </button>
        </section>
    }
}
