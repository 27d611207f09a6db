//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_modal;
mod form_fields;
mod list_toolbar;
mod log_panel;
mod modal_dialog;
mod nav_bar;
mod pagination;
mod skeleton_rows;
mod toaster;
mod todo_form;
mod user_form;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use form_fields::{SelectField, TextField};
pub use list_toolbar::{ListToolbar, SearchBox};
pub use log_panel::LogPanel;
pub use modal_dialog::ModalDialog;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use skeleton_rows::SkeletonRows;
pub use toaster::Toaster;
pub use todo_form::TodoForm;
pub use user_form::UserForm;
