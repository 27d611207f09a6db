//! Toaster Component
//!
//! Renders the notices held in the app store. Each one disappears on its
//! own after a few seconds or when clicked.

use leptos::prelude::*;

use crate::models::NoticeKind;
use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.notices().get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = match entry.notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| store_dismiss_notice(&store, id)>
                            {entry.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
