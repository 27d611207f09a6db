//! Application Context
//!
//! Session, route and API client shared via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::domain::{Entity, Session};
use todo_core::{ApiClient, AppConfig, AuthGate, ResourceClient, SessionStore};
use tracing::info;

use crate::commands;
use crate::models::{Notice, Route};
use crate::storage::BrowserStorage;
use crate::store::{store_dismiss_notice, store_push_notice, AppStore};

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session and route guarding
    gate: RwSignal<AuthGate<BrowserStorage>>,
    /// Route the location bar asks for - read
    pub route: ReadSignal<Route>,
    /// Route the location bar asks for - write
    set_route: WriteSignal<Route>,
    api: StoredValue<ApiClient, LocalStorage>,
    page_size: usize,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: &AppConfig, initial_route: Route, store: AppStore) -> Self {
        let session_store = SessionStore::with_key(BrowserStorage, config.storage_key.clone());
        let (route, set_route) = signal(initial_route);
        Self {
            gate: RwSignal::new(AuthGate::new(session_store)),
            route,
            set_route,
            api: StoredValue::new_local(ApiClient::new(config)),
            page_size: config.page_size,
            store,
        }
    }

    // ========================
    // Routing
    // ========================

    /// Route actually shown for the requested one
    pub fn resolve(&self, route: Route) -> Route {
        self.gate.with(|gate| gate.resolve(route))
    }

    /// Go to `route`, adding a history entry
    pub fn navigate(&self, route: Route) {
        commands::push_path(route.path());
        self.set_route.set(route);
    }

    /// Go to `route`, replacing the current history entry
    pub fn redirect(&self, route: Route) {
        commands::replace_path(route.path());
        self.set_route.set(route);
    }

    /// Follow a back/forward navigation
    pub fn sync_from_location(&self) {
        self.set_route.set(Route::from_path(&commands::current_path()));
    }

    // ========================
    // Session
    // ========================

    /// Current bearer token, read without tracking
    pub fn token(&self) -> Option<String> {
        self.gate.with_untracked(|gate| gate.token().map(str::to_string))
    }

    pub fn is_admin(&self) -> bool {
        self.gate.with(|gate| gate.is_admin())
    }

    /// Display name of the signed-in user
    pub fn user_name(&self) -> String {
        self.gate
            .with(|gate| gate.session().map(|session| session.user.name.clone()))
            .unwrap_or_default()
    }

    pub fn user_email(&self) -> String {
        self.gate
            .with(|gate| gate.session().map(|session| session.user.email.clone()))
            .unwrap_or_default()
    }

    pub fn sign_in(&self, session: Session) {
        self.gate.update(|gate| gate.sign_in(session));
        self.navigate(Route::Dashboard);
    }

    /// Tell the server, then drop the local session whatever it answered
    pub fn sign_out(&self) {
        let ctx = *self;
        let token = self.token();
        let api = self.api();
        spawn_local(async move {
            commands::signout(&api, token.as_deref(), move || ctx.end_session()).await;
        });
    }

    /// Drop the local session and go to the sign-in page
    pub fn end_session(&self) {
        let had_session = self.gate.try_update(|gate| gate.sign_out().is_some());
        if had_session == Some(true) {
            info!("session ended");
        }
        self.navigate(Route::SignIn);
    }

    // ========================
    // Remote API
    // ========================

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Client for the `E` collection, authorized with the current token
    pub fn resource<E: Entity>(&self) -> ResourceClient<E> {
        let token = self.token();
        self.api.with_value(|api| api.resource(token))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // ========================
    // Notices
    // ========================

    /// Show a toast, dismissed automatically after a few seconds
    pub fn notify(&self, notice: Notice) {
        let store = self.store;
        let id = store_push_notice(&store, notice);
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            store_dismiss_notice(&store, id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
