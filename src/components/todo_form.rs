//! Todo Form Component
//!
//! Create/edit form for a todo, shown in a modal. Values and validation
//! messages live in the list controller.

use leptos::prelude::*;

use super::{ModalDialog, SelectField, TextField};
use crate::list_screen::ListScreen;
use crate::models::{Modal, Todo, TodoStatus};

#[component]
pub fn TodoForm(screen: ListScreen<Todo>) -> impl IntoView {
    let editing = move || screen.with(|state| matches!(state.modal, Modal::Edit(_)));
    let submitting = move || screen.with(|state| state.form.submitting);
    let status_options: Vec<(&'static str, &'static str)> = TodoStatus::ALL
        .iter()
        .map(|status| (status.as_str(), status.label()))
        .collect();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.submit();
    };

    view! {
        <ModalDialog
            title=if editing() { "Edit Todo" } else { "Add Todo" }
            on_close=move |_| screen.controller().close_modal()
        >
            <form class="entity-form" on:submit=on_submit>
                <TextField
                    label="Title"
                    value=screen.form_value(|f| f.title.clone())
                    error=screen.field_error("title")
                    on_input=move |value: String| screen.edit(|f| f.title = value)
                />
                <TextField
                    label="Description"
                    value=screen.form_value(|f| f.description.clone())
                    error=screen.field_error("description")
                    on_input=move |value: String| screen.edit(|f| f.description = value)
                />
                <SelectField
                    label="Status"
                    options=status_options
                    value=screen.form_value(|f| f.status.clone())
                    error=screen.field_error("status")
                    on_change=move |value: String| screen.edit(|f| f.status = value)
                />
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
