use axum::{extract::State, response::Html};
use std::sync::Arc;
use tower_sessions::Session;

use super::menu::Page;
use super::session::VisitorSession;
use super::views::{self, Notice};
use super::{AppState, WebError};

/// GET /
/// Greeting and the read-only lost item list for signed-in visitors.
pub async fn home_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let visitor = VisitorSession::load(&session).await?;

    if !visitor.logged_in {
        return Ok(views::render(
            &visitor,
            Page::Home,
            &[Notice::Info(
                "Please log in to view and report lost items.".to_string(),
            )],
            "",
        ));
    }

    let items = state.reports().lost_items().await?;
    let content = format!(
        "<h3>Lost Items</h3>{}",
        views::lost_items_table(&items, false)
    );

    Ok(views::render(
        &visitor,
        Page::Home,
        &[Notice::Success(format!("Welcome, {}!", visitor.username))],
        &content,
    ))
}
