use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::services::{AuthService, ReportService};
use crate::state::SharedState;

mod admin;
mod auth;
mod error;
mod home;
pub mod menu;
mod reports;
pub mod session;
mod system;
pub mod views;

pub use error::WebError;
pub use menu::Page;
pub use session::VisitorSession;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth(&self) -> &Arc<dyn AuthService> {
        &self.shared.auth_service
    }

    #[must_use]
    pub fn reports(&self) -> &Arc<dyn ReportService> {
        &self.shared.report_service
    }
}

#[must_use]
pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState { shared })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config().server;

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_inactivity_minutes,
        )));

    Router::new()
        .route(Page::Home.path(), get(home::home_page))
        .route("/menu", get(menu::select))
        .route(Page::Login.path(), get(auth::login_page).post(auth::login))
        .route(
            Page::Register.path(),
            get(auth::register_page).post(auth::register),
        )
        .route(
            Page::ReportLost.path(),
            get(reports::report_lost_page).post(reports::report_lost),
        )
        .route(
            Page::ReportFound.path(),
            get(reports::report_found_page).post(reports::report_found),
        )
        .route(Page::Admin.path(), get(admin::admin_page))
        .route("/admin/lost/{id}/delete", post(admin::delete_lost_item))
        .route("/admin/found/{id}/delete", post(admin::delete_found_item))
        .route(Page::Logout.path(), get(auth::logout).post(auth::logout))
        .route("/health", get(system::health))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
