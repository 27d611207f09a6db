//! Domain Layer
//!
//! Entities exchanged with the remote API and the client-side
//! validation rules for their forms.

mod auth;
mod entity;
mod session;
mod todo;
mod user;
mod validation;

pub use auth::{Credentials, SignInFields, SignUpFields, SignUpRequest};
pub use entity::{Entity, FormMode};
pub use session::{Profile, Session, SessionRecord};
pub use todo::{truncate_text, Owner, Todo, TodoFields, TodoInput, TodoStatus};
pub use user::{User, UserFields, UserInput, UserType};
pub use validation::{is_valid_email, FieldErrors};
