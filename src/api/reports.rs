use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::menu::Page;
use super::session::VisitorSession;
use super::views::{self, Notice};
use super::{AppState, WebError};

#[derive(Debug, Deserialize)]
pub struct LostItemForm {
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub item_desc: String,
    #[serde(default)]
    pub last_seen_location: String,
}

#[derive(Debug, Deserialize)]
pub struct FoundItemForm {
    #[serde(default)]
    pub finder_name: String,
    #[serde(default)]
    pub item_desc: String,
    #[serde(default)]
    pub found_location: String,
}

fn login_required(visitor: &VisitorSession, page: Page) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        views::render(
            visitor,
            page,
            &[Notice::Warning(
                "You need to log in to report an item.".to_string(),
            )],
            "",
        ),
    )
        .into_response()
}

/// GET /report-lost
pub async fn report_lost_page(session: Session) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.logged_in {
        return Ok(login_required(&visitor, Page::ReportLost));
    }
    Ok(views::render(&visitor, Page::ReportLost, &[], &views::report_lost_form()).into_response())
}

/// POST /report-lost
/// Fields are stored as typed, empty ones included.
pub async fn report_lost(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LostItemForm>,
) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.logged_in {
        return Ok(login_required(&visitor, Page::ReportLost));
    }

    state
        .reports()
        .report_lost(&form.owner_name, &form.item_desc, &form.last_seen_location)
        .await?;

    Ok(views::render(
        &visitor,
        Page::ReportLost,
        &[Notice::Success("Lost item reported successfully!".to_string())],
        &views::report_lost_form(),
    )
    .into_response())
}

/// GET /report-found
pub async fn report_found_page(session: Session) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.logged_in {
        return Ok(login_required(&visitor, Page::ReportFound));
    }
    Ok(views::render(
        &visitor,
        Page::ReportFound,
        &[],
        &views::report_found_form(),
    )
    .into_response())
}

/// POST /report-found
pub async fn report_found(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<FoundItemForm>,
) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.logged_in {
        return Ok(login_required(&visitor, Page::ReportFound));
    }

    state
        .reports()
        .report_found(&form.finder_name, &form.item_desc, &form.found_location)
        .await?;

    Ok(views::render(
        &visitor,
        Page::ReportFound,
        &[Notice::Success("Found item reported successfully!".to_string())],
        &views::report_found_form(),
    )
    .into_response())
}
