//! Pagination Component
//!
//! Previous/next and numbered page buttons; hidden for a single page.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_select.run(current.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    (1..=total.get())
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if current.get() == page { "page-btn active" } else { "page-btn" }
                                    }
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| on_select.run(current.get_untracked() + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
