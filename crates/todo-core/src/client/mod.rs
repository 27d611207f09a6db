//! Remote API Client
//!
//! REST bindings to the Todo backend, organized by domain.

mod api;
mod resource;
mod wire;

pub use api::ApiClient;
pub use resource::{RemoteResource, ResourceClient};
