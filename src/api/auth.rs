use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::menu::Page;
use super::session::VisitorSession;
use super::views::{self, Notice};
use super::{AppState, WebError};
use crate::db::RegisterOutcome;
use crate::services::AuthError;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /login
pub async fn login_page(session: Session) -> Result<Html<String>, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    Ok(views::render(&visitor, Page::Login, &[], &views::login_form("")))
}

/// POST /login
/// Exact match on username and password; the session takes the stored admin flag.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    match state.auth().login(&form.username, &form.password).await {
        Ok(user) => {
            let visitor = VisitorSession::login(&session, &user).await?;
            Ok(views::render(
                &visitor,
                Page::Login,
                &[Notice::Success(format!("Logged in as {}", visitor.username))],
                "",
            )
            .into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            let visitor = VisitorSession::load(&session).await?;
            Ok((
                StatusCode::UNAUTHORIZED,
                views::render(
                    &visitor,
                    Page::Login,
                    &[Notice::Error("Invalid username or password".to_string())],
                    &views::login_form(&form.username),
                ),
            )
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /register
pub async fn register_page(session: Session) -> Result<Html<String>, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    Ok(views::render(
        &visitor,
        Page::Register,
        &[],
        &views::register_form(""),
    ))
}

/// POST /register
/// A taken username is reported as such instead of claiming success.
pub async fn register(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;

    let result = state
        .auth()
        .register(&form.username, &form.password, &form.confirm_password)
        .await;

    let (status, notice, content) = match result {
        Ok(RegisterOutcome::Created) => (
            StatusCode::OK,
            Notice::Success("Account created! You can now log in.".to_string()),
            String::new(),
        ),
        Ok(RegisterOutcome::AlreadyExists) => (
            StatusCode::CONFLICT,
            Notice::Warning(format!(
                "Username '{}' is already taken. Choose another one.",
                form.username
            )),
            views::register_form(""),
        ),
        Err(AuthError::PasswordMismatch) => (
            StatusCode::BAD_REQUEST,
            Notice::Error("Passwords do not match!".to_string()),
            views::register_form(&form.username),
        ),
        Err(AuthError::Validation(msg)) => (
            StatusCode::BAD_REQUEST,
            Notice::Error(msg),
            views::register_form(&form.username),
        ),
        Err(e) => return Err(e.into()),
    };

    Ok((
        status,
        views::render(&visitor, Page::Register, &[notice], &content),
    )
        .into_response())
}

/// GET|POST /logout
/// Always succeeds, even for visitors that were never logged in.
pub async fn logout(session: Session) -> Result<Html<String>, WebError> {
    let visitor = VisitorSession::logout(&session).await?;
    Ok(views::render(
        &visitor,
        Page::Logout,
        &[Notice::Success("You have been logged out.".to_string())],
        "",
    ))
}
