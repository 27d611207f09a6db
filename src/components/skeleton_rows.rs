//! Skeleton Rows Component
//!
//! Placeholder table rows shown while a list loads.

use leptos::prelude::*;

const SKELETON_ROWS: usize = 5;

#[component]
pub fn SkeletonRows(columns: usize) -> impl IntoView {
    (0..SKELETON_ROWS)
        .map(|_| {
            view! {
                <tr class="skeleton-row">
                    {(0..columns)
                        .map(|_| view! { <td><span class="skeleton-bar"></span></td> })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view()
}
