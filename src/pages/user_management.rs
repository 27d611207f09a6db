//! User Management Page
//!
//! Admin-only list of accounts with create, edit and delete.

use leptos::prelude::*;

use crate::components::{
    DeleteConfirmModal, ListToolbar, Pagination, SearchBox, SkeletonRows, UserForm,
};
use crate::list_screen::{use_list_screen, ListScreen};
use crate::models::{Modal, User};

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let screen = use_list_screen::<User>();

    let modal = Memo::new(move |_| screen.with(|state| state.modal.clone()));
    let loading = Memo::new(move |_| screen.with(|state| state.view.loading()));

    view! {
        <section class="user-management">
            <ListToolbar
                title="User List"
                add_label="Add User"
                on_add=move |_| screen.controller().open_create()
                on_refresh=move |_| screen.refresh()
            />
            <SearchBox
                value=Signal::derive(move || screen.with(|state| state.view.filter_text().to_string()))
                on_input=move |text: String| screen.controller().set_filter(text)
            />
            <table class="list-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"name"</th>
                        <th>"email"</th>
                        <th>"username"</th>
                        <th>"user Type"</th>
                        <th>"action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            view! { <SkeletonRows columns=6 /> }.into_any()
                        } else {
                            user_rows(screen).into_any()
                        }
                    }}
                </tbody>
            </table>
            <Pagination
                current=Signal::derive(move || screen.with(|state| state.view.current_page()))
                total=Signal::derive(move || screen.with(|state| state.view.total_pages()))
                on_select=move |page: usize| screen.controller().set_page(page)
            />
            {move || match modal.get() {
                Modal::Create | Modal::Edit(_) => view! { <UserForm screen=screen /> }.into_any(),
                Modal::ConfirmDelete(_) => {
                    view! {
                        <DeleteConfirmModal
                            kind="user"
                            busy=Signal::derive(move || screen.with(|state| state.deleting))
                            on_confirm=move |_| screen.confirm_delete()
                            on_cancel=move |_| screen.controller().cancel_delete()
                        />
                    }
                        .into_any()
                }
                // Users have no detail view.
                Modal::Closed | Modal::View(_) => ().into_any(),
            }}
        </section>
    }
}

fn user_rows(screen: ListScreen<User>) -> impl IntoView {
    let rows: Vec<(usize, User)> = screen.with(|state| {
        state
            .view
            .page()
            .rows
            .into_iter()
            .map(|row| (row.serial, row.item.clone()))
            .collect()
    });

    rows.into_iter()
        .map(|(serial, user)| {
            let edit_id = user.id.clone();
            let delete_id = user.id.clone();
            view! {
                <tr>
                    <td>{serial}</td>
                    <td class="cell-strong">{user.name}</td>
                    <td>{user.email}</td>
                    <td>{user.username}</td>
                    <td>{user.user_type.label()}</td>
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
