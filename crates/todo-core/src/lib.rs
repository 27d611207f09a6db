//! Todo App Core
//!
//! Framework-independent core of the Todo app:
//! - domain: Todo/User/Session entities and form validation
//! - session_store / auth_gate: durable session and route guarding
//! - client: REST bindings to the remote API
//! - list: list view state and the list-management controller

pub mod auth_gate;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod list;
pub mod session_store;
pub mod storage;

pub use auth_gate::{sign_out_remote, AuthGate, AuthState, Route, RouteDecision};
pub use client::{ApiClient, RemoteResource, ResourceClient};
pub use config::AppConfig;
pub use error::{ApiError, ConfigError, StorageError};
pub use list::{ListController, ListObserver, ListState, ListView, Modal, Notice, NoticeKind};
pub use session_store::SessionStore;
pub use storage::{KeyValueStorage, MemoryStorage};
