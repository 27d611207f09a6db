//! Dashboard Page
//!
//! The signed-in user's todos: searchable, paginated table with create,
//! view, edit and delete through modals.

use leptos::prelude::*;

use crate::components::{
    DeleteConfirmModal, ListToolbar, ModalDialog, Pagination, SearchBox, SkeletonRows, TodoForm,
};
use crate::context::use_app_context;
use crate::list_screen::{use_list_screen, ListScreen};
use crate::models::{truncate_text, Modal, Todo};

/// Description length shown in the table
const DESCRIPTION_PREVIEW: usize = 40;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let screen = use_list_screen::<Todo>();

    let modal = Memo::new(move |_| screen.with(|state| state.modal.clone()));
    let has_items = Memo::new(move |_| screen.with(|state| !state.view.items().is_empty()));
    let loading = Memo::new(move |_| screen.with(|state| state.view.loading()));

    view! {
        <section class="dashboard">
            <ListToolbar
                title="Todo List"
                add_label="Add Todo"
                on_add=move |_| screen.controller().open_create()
                on_refresh=move |_| screen.refresh()
            />
            <Show
                when=move || has_items.get() || loading.get()
                fallback=move || {
                    view! {
                        <div class="greeting">
                            {move || {
                                format!(
                                    "Hey {}, Welcome to the dashboard! You have no todos yet.",
                                    ctx.user_name(),
                                )
                            }}
                        </div>
                    }
                }
            >
                <SearchBox
                    value=Signal::derive(move || screen.with(|state| state.view.filter_text().to_string()))
                    on_input=move |text: String| screen.controller().set_filter(text)
                />
                <table class="list-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"title"</th>
                            <th>"description"</th>
                            <th>"status"</th>
                            <th>"created by"</th>
                            <th>"action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                view! { <SkeletonRows columns=6 /> }.into_any()
                            } else {
                                todo_rows(screen).into_any()
                            }
                        }}
                    </tbody>
                </table>
                <Pagination
                    current=Signal::derive(move || screen.with(|state| state.view.current_page()))
                    total=Signal::derive(move || screen.with(|state| state.view.total_pages()))
                    on_select=move |page: usize| screen.controller().set_page(page)
                />
            </Show>
            {move || match modal.get() {
                Modal::Closed => ().into_any(),
                Modal::Create | Modal::Edit(_) => view! { <TodoForm screen=screen /> }.into_any(),
                Modal::View(_) => view! { <TodoDetails screen=screen /> }.into_any(),
                Modal::ConfirmDelete(_) => {
                    view! {
                        <DeleteConfirmModal
                            kind="todo"
                            busy=Signal::derive(move || screen.with(|state| state.deleting))
                            on_confirm=move |_| screen.confirm_delete()
                            on_cancel=move |_| screen.controller().cancel_delete()
                        />
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn todo_rows(screen: ListScreen<Todo>) -> impl IntoView {
    let rows: Vec<(usize, Todo)> = screen.with(|state| {
        state
            .view
            .page()
            .rows
            .into_iter()
            .map(|row| (row.serial, row.item.clone()))
            .collect()
    });

    rows.into_iter()
        .map(|(serial, todo)| {
            let view_id = todo.id.clone();
            let edit_id = todo.id.clone();
            let delete_id = todo.id.clone();
            view! {
                <tr>
                    <td>{serial}</td>
                    <td
                        class="cell-link"
                        on:click=move |_| {
                            screen.controller().open_view(&view_id);
                        }
                    >
                        {todo.title.clone()}
                    </td>
                    <td>{truncate_text(&todo.description, DESCRIPTION_PREVIEW).into_owned()}</td>
                    <td>{todo.status.label()}</td>
                    <td>{todo.owner_name().to_string()}</td>
                    <td class="row-actions">
                        <button
                            class="btn btn-edit"
                            title="Edit"
                            on:click=move |_| {
                                screen.controller().open_edit(&edit_id);
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn btn-danger"
                            title="Delete"
                            on:click=move |_| screen.controller().request_delete(&delete_id)
                        >
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view()
}

/// Read-only view of the selected todo
#[component]
fn TodoDetails(screen: ListScreen<Todo>) -> impl IntoView {
    let todo = screen.with(|state| state.selected().cloned());

    view! {
        <ModalDialog title="View Todo" on_close=move |_| screen.controller().close_modal()>
            {todo
                .map(|todo| {
                    view! {
                        <dl class="details">
                            <dt>"Title"</dt>
                            <dd class="details-title">{todo.title}</dd>
                            <dt>"Description"</dt>
                            <dd>{todo.description}</dd>
                            <dt>"Status"</dt>
                            <dd>{todo.status.label()}</dd>
                        </dl>
                    }
                })}
        </ModalDialog>
    }
}
