//! User Form Component
//!
//! Create/edit form for a user account. The password field only exists
//! when creating.

use leptos::prelude::*;

use super::{ModalDialog, SelectField, TextField};
use crate::list_screen::ListScreen;
use crate::models::{Modal, User, UserType};

#[component]
pub fn UserForm(screen: ListScreen<User>) -> impl IntoView {
    let editing = move || screen.with(|state| matches!(state.modal, Modal::Edit(_)));
    let submitting = move || screen.with(|state| state.form.submitting);
    let type_options: Vec<(&'static str, &'static str)> = UserType::ALL
        .iter()
        .map(|user_type| (user_type.as_str(), user_type.label()))
        .collect();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.submit();
    };

    view! {
        <ModalDialog
            title=if editing() { "Edit User" } else { "Add User" }
            on_close=move |_| screen.controller().close_modal()
        >
            <form class="entity-form" on:submit=on_submit>
                <TextField
                    label="Name"
                    value=screen.form_value(|f| f.name.clone())
                    error=screen.field_error("name")
                    on_input=move |value: String| screen.edit(|f| f.name = value)
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=screen.form_value(|f| f.email.clone())
                    error=screen.field_error("email")
                    on_input=move |value: String| screen.edit(|f| f.email = value)
                />
                <TextField
                    label="Username"
                    value=screen.form_value(|f| f.username.clone())
                    error=screen.field_error("username")
                    on_input=move |value: String| screen.edit(|f| f.username = value)
                />
                <SelectField
                    label="User Type"
                    options=type_options
                    value=screen.form_value(|f| f.user_type.clone())
                    error=screen.field_error("userType")
                    on_change=move |value: String| screen.edit(|f| f.user_type = value)
                />
                <Show when=move || !editing()>
                    <TextField
                        label="Password"
                        input_type="password"
                        value=screen.form_value(|f| f.password.clone())
                        error=screen.field_error("password")
                        on_input=move |value: String| screen.edit(|f| f.password = value)
                    />
                </Show>
                <div class="modal-actions">
                    <button
                        type="button"
                        class="btn cancel-btn"
                        on:click=move |_| screen.controller().close_modal()
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || match (submitting(), editing()) {
                            (true, _) => "Saving...",
                            (false, true) => "Update",
                            (false, false) => "Create",
                        }}
                    </button>
                </div>
            </form>
        </ModalDialog>
    }
}
