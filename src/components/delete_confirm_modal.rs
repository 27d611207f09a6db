//! Delete Confirm Modal Component
//!
//! Asks before a row is deleted; nothing is sent until confirmed.

use leptos::prelude::*;

use super::ModalDialog;

/// Delete confirmation dialog
///
/// # Arguments
/// * `kind` - What is being deleted, lowercase (e.g., "todo" or "user")
/// * `busy` - True while the delete request is in flight
/// * `on_confirm` - Called when the user confirms deletion
/// * `on_cancel` - Called when the dialog is dismissed
#[component]
pub fn DeleteConfirmModal(
    kind: &'static str,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalDialog title="" on_close=on_cancel>
            <div class="delete-confirm">
                <span class="delete-confirm-icon">"!"</span>
                <h3 class="delete-confirm-text">
                    {format!("Are you sure? You want to delete this {kind}?")}
                </h3>
                <div class="modal-actions">
                    <button
                        class="btn btn-danger confirm-btn"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        "Yes I'm sure"
                    </button>
                    <button class="btn cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </ModalDialog>
    }
}
