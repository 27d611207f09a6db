//! List-Management Controller
//!
//! Owns the state of one list screen and drives create/edit/delete through
//! modals. Every successful mutation is followed by a full reload; the
//! controller never patches `items` locally.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, warn};

use super::view::ListView;
use crate::client::RemoteResource;
use crate::domain::{Entity, FieldErrors, FormMode};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing message (a toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Hooks through which the controller reaches the presentation layer
pub trait ListObserver {
    /// State changed; re-render
    fn changed(&self) {}

    fn notice(&self, _notice: Notice) {}

    /// The server no longer accepts the session token
    fn unauthorized(&self) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ListObserver for NoopObserver {}

/// The one modal open on a list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(String),
    View(String),
    ConfirmDelete(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F> {
    pub fields: F,
    pub errors: FieldErrors,
    /// A create/update request is in flight
    pub submitting: bool,
}

#[derive(Debug, Clone)]
pub struct ListState<E: Entity> {
    pub view: ListView<E>,
    pub modal: Modal,
    pub form: FormState<E::Fields>,
    /// A confirmed delete is in flight
    pub deleting: bool,
}

impl<E: Entity> Default for ListState<E> {
    fn default() -> Self {
        Self {
            view: ListView::new(),
            modal: Modal::Closed,
            form: FormState::default(),
            deleting: false,
        }
    }
}

impl<E: Entity> ListState<E> {
    /// Entity the open edit/view/delete modal refers to
    pub fn selected(&self) -> Option<&E> {
        match &self.modal {
            Modal::Edit(id) | Modal::View(id) | Modal::ConfirmDelete(id) => self.view.find(id),
            Modal::Closed | Modal::Create => None,
        }
    }
}

/// Controller for one list screen. Clones share state.
///
/// State lives behind `Rc<RefCell<_>>`; no borrow is ever held across an
/// `.await`, so concurrent UI callbacks cannot observe a borrowed cell.
pub struct ListController<E: Entity, R> {
    resource: Rc<R>,
    state: Rc<RefCell<ListState<E>>>,
    observer: Rc<dyn ListObserver>,
}

impl<E: Entity, R> Clone for ListController<E, R> {
    fn clone(&self) -> Self {
        Self {
            resource: Rc::clone(&self.resource),
            state: Rc::clone(&self.state),
            observer: Rc::clone(&self.observer),
        }
    }
}

impl<E: Entity, R: RemoteResource<E>> ListController<E, R> {
    pub fn new(resource: R, observer: Rc<dyn ListObserver>) -> Self {
        Self {
            resource: Rc::new(resource),
            state: Rc::new(RefCell::new(ListState::default())),
            observer,
        }
    }

    pub fn with_page_size(resource: R, observer: Rc<dyn ListObserver>, page_size: usize) -> Self {
        let controller = Self::new(resource, observer);
        controller.state.borrow_mut().view = ListView::with_page_size(page_size);
        controller
    }

    /// Read the current state
    pub fn with_state<T>(&self, f: impl FnOnce(&ListState<E>) -> T) -> T {
        f(&self.state.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut ListState<E>)) {
        f(&mut self.state.borrow_mut());
        self.observer.changed();
    }

    // ========================
    // Loading
    // ========================

    /// Fetch the whole collection. Failures are logged and leave an empty list.
    pub async fn load(&self) -> Result<(), ApiError> {
        self.update(|state| state.view.set_loading(true));

        let result = self.resource.list().await;
        match &result {
            Ok(items) => debug!(kind = E::KIND, count = items.len(), "loaded list"),
            Err(err) => {
                warn!(kind = E::KIND, %err, "failed to load list");
                if err.is_unauthorized() {
                    self.observer.unauthorized();
                }
            }
        }

        let outcome = result.as_ref().map(drop).map_err(Clone::clone);
        self.update(|state| {
            state.view.set_items(result.unwrap_or_default());
            state.view.set_loading(false);
        });
        outcome
    }

    /// Manual reload with an explicit notice
    pub async fn refresh(&self) {
        match self.load().await {
            Ok(()) => self.observer.notice(Notice::success("Record Refreshed")),
            Err(err) => self
                .observer
                .notice(Notice::error(err.user_message(&format!("Failed to load {}s", E::KIND)))),
        }
    }

    // ========================
    // Filter / Pagination
    // ========================

    pub fn set_filter(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.view.set_filter(text));
    }

    pub fn set_page(&self, page: usize) {
        self.update(|state| state.view.set_page(page));
    }

    // ========================
    // Modals
    // ========================

    /// Open the blank create form
    pub fn open_create(&self) {
        self.update(|state| {
            state.modal = Modal::Create;
            state.form = FormState::default();
        });
    }

    /// Open the edit form pre-filled from row `id`. False if the row is gone.
    pub fn open_edit(&self, id: &str) -> bool {
        let Some(fields) = self.with_state(|state| state.view.find(id).map(E::to_fields)) else {
            warn!(kind = E::KIND, id, "edit requested for unknown row");
            return false;
        };
        self.update(|state| {
            state.modal = Modal::Edit(id.to_string());
            state.form = FormState {
                fields,
                ..FormState::default()
            };
        });
        true
    }

    /// Open the read-only detail modal for row `id`
    pub fn open_view(&self, id: &str) -> bool {
        if self.with_state(|state| state.view.find(id).is_none()) {
            return false;
        }
        self.update(|state| state.modal = Modal::View(id.to_string()));
        true
    }

    /// Ask for confirmation before deleting row `id`
    pub fn request_delete(&self, id: &str) {
        self.update(|state| state.modal = Modal::ConfirmDelete(id.to_string()));
    }

    /// Dismiss whatever modal is open, discarding form input.
    pub fn close_modal(&self) {
        self.update(|state| {
            state.modal = Modal::Closed;
            state.form = FormState::default();
        });
    }

    pub fn cancel_delete(&self) {
        self.close_modal();
    }

    /// Apply an input change to the open form
    pub fn edit_fields(&self, f: impl FnOnce(&mut E::Fields)) {
        self.update(|state| f(&mut state.form.fields));
    }

    // ========================
    // Mutations
    // ========================

    /// Submit the open create/edit form. Returns true once saved.
    ///
    /// Validation failures are stored per field and never reach the network.
    pub async fn submit(&self) -> bool {
        let (modal, fields, busy) = self.with_state(|state| {
            (state.modal.clone(), state.form.fields.clone(), state.form.submitting)
        });
        if busy {
            return false;
        }
        let (mode, target) = match modal {
            Modal::Create => (FormMode::Create, None),
            Modal::Edit(id) => (FormMode::Edit, Some(id)),
            _ => return false,
        };

        let input = match E::validate(&fields, mode) {
            Ok(input) => input,
            Err(errors) => {
                debug!(kind = E::KIND, invalid = errors.len(), "form rejected");
                self.update(|state| state.form.errors = errors);
                return false;
            }
        };

        self.update(|state| {
            state.form.errors = FieldErrors::new();
            state.form.submitting = true;
        });

        let (result, verb) = match &target {
            None => (self.resource.create(&input).await, "create"),
            Some(id) => (self.resource.update(id, &input).await, "update"),
        };

        match result {
            Ok(()) => {
                // A failed reload is already logged; the mutation itself succeeded.
                let _ = self.load().await;
                self.observer
                    .notice(Notice::success(format!("{} {verb}d successfully", E::LABEL)));
                self.update(|state| {
                    state.modal = Modal::Closed;
                    state.form = FormState::default();
                });
                true
            }
            Err(err) => {
                self.update(|state| state.form.submitting = false);
                self.report_failure(verb, &err);
                false
            }
        }
    }

    /// Delete the row awaiting confirmation. Returns true once deleted.
    ///
    /// Ignored while an earlier confirmation is still in flight.
    pub async fn confirm_delete(&self) -> bool {
        let Some(id) = self.with_state(|state| match &state.modal {
            Modal::ConfirmDelete(id) if !state.deleting => Some(id.clone()),
            _ => None,
        }) else {
            return false;
        };
        self.update(|state| state.deleting = true);

        match self.resource.delete(&id).await {
            Ok(()) => {
                let _ = self.load().await;
                self.observer
                    .notice(Notice::success(format!("{} deleted successfully", E::LABEL)));
                self.update(|state| {
                    state.deleting = false;
                    state.modal = Modal::Closed;
                    state.form = FormState::default();
                });
                true
            }
            Err(err) => {
                self.update(|state| state.deleting = false);
                self.report_failure("delete", &err);
                false
            }
        }
    }

    fn report_failure(&self, verb: &str, err: &ApiError) {
        error!(kind = E::KIND, verb, %err, "mutation failed");
        if err.is_unauthorized() {
            self.observer.unauthorized();
        }
        let fallback = format!("Failed to {verb} {}", E::KIND);
        self.observer.notice(Notice::error(err.user_message(&fallback)));
    }
}
