//! Backend and Browser Command Wrappers
//!
//! Frontend bindings to the REST API and the browser history, organized by
//! domain.

mod auth;
mod history;

pub use auth::*;
pub use history::*;
