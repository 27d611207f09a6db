//! List Toolbar Components
//!
//! Heading with add/refresh buttons, and the search box above a table.

use leptos::prelude::*;

#[component]
pub fn ListToolbar(
    #[prop(into)] title: String,
    #[prop(into)] add_label: String,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="list-toolbar">
            <h1 class="list-title">{title}</h1>
            <div class="list-actions">
                <button class="btn" on:click=move |_| on_add.run(())>
                    {add_label}
                </button>
                <button class="btn refresh-btn" on:click=move |_| on_refresh.run(())>
                    "Refresh"
                </button>
            </div>
        </div>
    }
}

/// Free-text filter over the loaded rows
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-row">
            <input
                type="search"
                class="search-box"
                placeholder="Search"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
