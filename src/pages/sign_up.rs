//! Sign-Up Page
//!
//! Creates an account, then sends the user to sign in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TextField;
use crate::context::use_app_context;
use crate::models::{Notice, Route, SignUpFields};
use todo_core::domain::FieldErrors;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = use_app_context();
    let fields = RwSignal::new(SignUpFields::default());
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
        let request = match fields.with_untracked(SignUpFields::validate) {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_submitting.set(true);

        let api = ctx.api();
        spawn_local(async move {
            match commands::signup(&api, &request).await {
                Ok(()) => {
                    ctx.notify(Notice::success(
                        "User created successfully! Please login to continue",
                    ));
                    ctx.navigate(Route::SignIn);
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
                <h2>"Sign Up"</h2>
                <TextField
                    label="Name"
                    value=Signal::derive(move || fields.with(|f| f.name.clone()))
                    error=error("name")
                    on_input=move |value: String| fields.update(|f| f.name = value)
                />
                <TextField
                    label="Username"
                    value=Signal::derive(move || fields.with(|f| f.username.clone()))
                    error=error("username")
                    on_input=move |value: String| fields.update(|f| f.username = value)
                />
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
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <a
                        href=Route::SignIn.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Route::SignIn);
                        }
                    >
                        "Sign in"
                    </a>
                </p>
            </form>
        </section>
    }
}
