//! Sign-In Page
//!
//! Validates the credentials locally, then exchanges them for a session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TextField;
use crate::context::use_app_context;
use crate::models::{Notice, Route, SignInFields};
use todo_core::domain::FieldErrors;

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = use_app_context();
    let fields = RwSignal::new(SignInFields::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);

    let error = move |field: &'static str| {
        Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = match fields.with_untracked(SignInFields::validate) {
            Ok(credentials) => credentials,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_submitting.set(true);

        let api = ctx.api();
        spawn_local(async move {
            match commands::login(&api, &credentials).await {
                Ok(session) => {
                    ctx.notify(Notice::success("Login successful"));
                    ctx.sign_in(session);
                }
                Err(message) => {
                    ctx.notify(Notice::error(message));
                    set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Sign In"</h2>
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || fields.with(|f| f.email.clone()))
                    error=error("email")
                    on_input=move |value: String| fields.update(|f| f.email = value)
                />
                <TextField
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || fields.with(|f| f.password.clone()))
                    error=error("password")
                    on_input=move |value: String| fields.update(|f| f.password = value)
                />
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a
                        href=Route::SignUp.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Route::SignUp);
                        }
                    >
                        "Sign up"
                    </a>
                </p>
            </form>
        </section>
    }
}
