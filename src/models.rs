//! Frontend Data Models
//!
//! Re-exports of the core types used by the views.

pub use todo_core::domain::{
    truncate_text, SignInFields, SignUpFields, Todo, TodoStatus, User, UserType,
};
pub use todo_core::{Modal, Notice, NoticeKind, Route};
