use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::info;

use super::menu::Page;
use super::session::VisitorSession;
use super::views::{self, Notice};
use super::{AppState, WebError};

fn admin_required(visitor: &VisitorSession) -> Response {
    (
        StatusCode::FORBIDDEN,
        views::render(
            visitor,
            Page::Admin,
            &[Notice::Warning("Admin access only.".to_string())],
            "",
        ),
    )
        .into_response()
}

/// GET /admin
/// Both report lists, each row with its own delete button.
pub async fn admin_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.is_admin {
        return Ok(admin_required(&visitor));
    }

    let lost = state.reports().lost_items().await?;
    let found = state.reports().found_items().await?;

    let content = format!(
        "<h3>Lost Items</h3>{}<h3>Found Items</h3>{}",
        views::lost_items_table(&lost, true),
        views::found_items_table(&found, true)
    );

    Ok(views::render(&visitor, Page::Admin, &[], &content).into_response())
}

/// POST /admin/lost/{id}/delete
/// Unknown ids are ignored; either way the admin view is reloaded.
pub async fn delete_lost_item(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.is_admin {
        return Ok(admin_required(&visitor));
    }

    if state.reports().delete_lost(id).await? {
        info!("Admin {} deleted lost item {}", visitor.username, id);
    }

    Ok(Redirect::to(Page::Admin.path()).into_response())
}

/// POST /admin/found/{id}/delete
pub async fn delete_found_item(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let visitor = VisitorSession::load(&session).await?;
    if !visitor.is_admin {
        return Ok(admin_required(&visitor));
    }

    if state.reports().delete_found(id).await? {
        info!("Admin {} deleted found item {}", visitor.username, id);
    }

    Ok(Redirect::to(Page::Admin.path()).into_response())
}
