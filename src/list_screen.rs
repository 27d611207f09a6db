//! List Screen Binding
//!
//! Connects a core `ListController` to Leptos: a version signal re-renders
//! the screen on every state change, notices go to the toaster, and an
//! unauthorized response ends the session.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::domain::Entity;
use todo_core::{ListController, ListObserver, ListState, ResourceClient};

use crate::context::{use_app_context, AppContext};
use crate::models::Notice;

pub type Controller<E> = ListController<E, ResourceClient<E>>;

struct ScreenObserver {
    version: RwSignal<u32>,
    ctx: AppContext,
}

impl ListObserver for ScreenObserver {
    fn changed(&self) {
        // The screen may already be unmounted when a request completes.
        self.version.try_update(|v| *v = v.wrapping_add(1));
    }

    fn notice(&self, notice: Notice) {
        self.ctx.notify(notice);
    }

    fn unauthorized(&self) {
        self.ctx.end_session();
    }
}

/// Reactive handle to one list screen's controller
pub struct ListScreen<E: Entity> {
    controller: StoredValue<Controller<E>, LocalStorage>,
    version: RwSignal<u32>,
}

impl<E: Entity> Clone for ListScreen<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ListScreen<E> {}

impl<E: Entity> ListScreen<E> {
    /// Read controller state, re-running on every change
    pub fn with<T>(&self, f: impl FnOnce(&ListState<E>) -> T) -> T {
        self.version.track();
        self.controller.with_value(|controller| controller.with_state(f))
    }

    pub fn controller(&self) -> Controller<E> {
        self.controller.get_value()
    }

    /// One value of the open form
    pub fn form_value(self, get: fn(&E::Fields) -> String) -> Signal<String> {
        Signal::derive(move || self.with(|state| get(&state.form.fields)))
    }

    /// Validation message for `field` on the open form
    pub fn field_error(self, field: &'static str) -> Signal<Option<String>> {
        Signal::derive(move || self.with(|state| state.form.errors.get(field).map(str::to_string)))
    }

    /// Apply an input change to the open form
    pub fn edit(self, apply: impl FnOnce(&mut E::Fields)) {
        self.controller().edit_fields(apply);
    }

    /// Run an async controller action on the UI thread
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Controller<E>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller()));
    }

    pub fn refresh(&self) {
        self.spawn(|controller| async move { controller.refresh().await });
    }

    pub fn submit(&self) {
        self.spawn(|controller| async move {
            controller.submit().await;
        });
    }

    pub fn confirm_delete(&self) {
        self.spawn(|controller| async move {
            controller.confirm_delete().await;
        });
    }
}

/// Create the controller for an `E` screen and start the initial load
pub fn use_list_screen<E: Entity>() -> ListScreen<E> {
    let ctx = use_app_context();
    let version = RwSignal::new(0u32);
    let observer: Rc<dyn ListObserver> = Rc::new(ScreenObserver { version, ctx });
    let controller = ListController::with_page_size(ctx.resource::<E>(), observer, ctx.page_size());

    let screen = ListScreen {
        controller: StoredValue::new_local(controller),
        version,
    };
    screen.spawn(|controller| async move {
        // Failures are logged by the controller and leave an empty list.
        let _ = controller.load().await;
    });
    screen
}
