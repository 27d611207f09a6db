//! Form Field Components
//!
//! Labelled inputs with an inline validation message.

use leptos::prelude::*;

fn field_class(base: &'static str, error: Signal<Option<String>>) -> impl Fn() -> String {
    move || {
        if error.get().is_some() {
            format!("{base} invalid")
        } else {
            base.to_string()
        }
    }
}

/// Text input bound to a value signal
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
    /// HTML input type, "text" if omitted
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class=field_class("form-input", error)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <span class="form-error">{message}</span> })}
        </label>
    }
}

/// Select input with a blank placeholder option
///
/// `options` are `(value, label)` pairs.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let placeholder = format!("Select {label}");
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                class=field_class("form-select", error)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|message| view! { <span class="form-error">{message}</span> })}
        </label>
    }
}
