//! Todo App Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod list_screen;
mod models;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init_logger("TodoApp", tracing::Level::DEBUG) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    mount_to_body(App);
}
