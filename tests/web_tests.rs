//! End-to-end page flows driven through the router.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use recoverease::api::AppState;
use recoverease::config::Config;
use std::sync::Arc;
use tower::ServiceExt;

async fn spawn_app() -> (Arc<AppState>, Router) {
    let db_path =
        std::env::temp_dir().join(format!("recoverease-web-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    let state = recoverease::api::create_app_state_from_config(config)
        .await
        .expect("failed to create app state");
    let router = recoverease::api::router(state.clone());
    (state, router)
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_form(
            "/login",
            &format!("username={username}&password={password}"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("login should set a session cookie")
}

#[tokio::test]
async fn home_prompts_login_when_logged_out() {
    let (_, app) = spawn_app().await;

    let response = app.clone().oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Please log in"));
    assert!(body.contains("Not signed in"));
}

#[tokio::test]
async fn bootstrap_admin_can_open_admin_page() {
    let (_, app) = spawn_app().await;
    let cookie = login(&app, "admin", "admin").await;

    let response = app
        .clone()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Lost Items"));
    assert!(body.contains("Found Items"));
    assert!(body.contains("(admin)"));
}

#[tokio::test]
async fn invalid_login_is_rejected() {
    let (_, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/login", "username=admin&password=Admin", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&response).is_none());

    let body = body_text(response).await;
    assert!(body.contains("Invalid username or password"));
}

#[tokio::test]
async fn reporting_requires_login_and_writes_nothing() {
    let (state, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/report-lost",
            "owner_name=A&item_desc=B&last_seen_location=C",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("You need to log in"));

    let response = app
        .clone()
        .oneshot(post_form(
            "/report-found",
            "finder_name=A&item_desc=B&found_location=C",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert!(state.store().fetch_lost_items().await.unwrap().is_empty());
    assert!(state.store().fetch_found_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn registered_user_reports_and_sees_lost_items() {
    let (state, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/register",
            "username=jane&password=pw&confirm_password=pw",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Account created"));

    let cookie = login(&app, "jane", "pw").await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/report-lost",
            "owner_name=Jane&item_desc=Red+wallet&last_seen_location=Cafeteria",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("reported successfully"));

    let response = app
        .clone()
        .oneshot(post_form(
            "/report-found",
            "finder_name=Jane&item_desc=Umbrella&found_location=Desk",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let lost = state.store().fetch_lost_items().await.unwrap();
    assert_eq!(lost.len(), 1);
    assert_eq!(lost[0].item_desc, "Red wallet");
    assert_eq!(lost[0].status, "Lost");
    assert_eq!(state.store().fetch_found_items().await.unwrap().len(), 1);

    let response = app.clone().oneshot(get("/", Some(&cookie))).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Welcome, jane!"));
    assert!(body.contains("Red wallet"));

    let response = app
        .clone()
        .oneshot(get("/admin", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_text(response).await.contains("Admin access only"));
}

#[tokio::test]
async fn register_reports_duplicates_and_mismatches() {
    let (state, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/register",
            "username=kim&password=one&confirm_password=two",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Passwords do not match"));
    assert!(state.store().check_user("kim", "one").await.unwrap().is_none());
    assert!(state.store().check_user("kim", "two").await.unwrap().is_none());

    for _ in 0..2 {
        app.clone()
            .oneshot(post_form(
                "/register",
                "username=kim&password=one&confirm_password=one",
                None,
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(post_form(
            "/register",
            "username=kim&password=two&confirm_password=two",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("already taken"));

    assert!(state.store().check_user("kim", "one").await.unwrap().is_some());
    assert!(state.store().check_user("kim", "two").await.unwrap().is_none());
}

#[tokio::test]
async fn register_rejects_empty_password() {
    let (state, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/register",
            "username=lee&password=&confirm_password=",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Password is required"));

    // The name is still free once a real password is given.
    assert!(
        state
            .auth()
            .register("lee", "pw", "pw")
            .await
            .is_ok_and(|outcome| outcome == recoverease::db::RegisterOutcome::Created)
    );
}

#[tokio::test]
async fn reports_with_empty_or_missing_fields_are_stored() {
    let (state, app) = spawn_app().await;
    let cookie = login(&app, "admin", "admin").await;

    let response = app
        .clone()
        .oneshot(post_form("/report-lost", "owner_name=&item_desc=", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("reported successfully"));

    let response = app
        .clone()
        .oneshot(post_form("/report-found", "", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("reported successfully"));

    let lost = state.store().fetch_lost_items().await.unwrap();
    assert_eq!(lost.len(), 1);
    assert_eq!(lost[0].owner_name, "");
    assert_eq!(lost[0].item_desc, "");
    assert_eq!(lost[0].last_seen_location, "");
    assert_eq!(lost[0].status, "Lost");

    let found = state.store().fetch_found_items().await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].finder_name, "");
    assert_eq!(found[0].found_location, "");
}

#[tokio::test]
async fn admin_deletes_reports_and_is_redirected() {
    let (state, app) = spawn_app().await;
    let lost = state
        .store()
        .report_lost_item("Owner", "Keys", "Gym")
        .await
        .unwrap();
    let found = state
        .store()
        .report_found_item("Finder", "Phone", "Lobby")
        .await
        .unwrap();

    state
        .store()
        .register_user("plain", "pw", false)
        .await
        .unwrap();
    let plain_cookie = login(&app, "plain", "pw").await;

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("/admin/lost/{}/delete", lost.id),
            "",
            Some(&plain_cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(state.store().fetch_lost_items().await.unwrap().len(), 1);

    let admin_cookie = login(&app, "admin", "admin").await;

    for uri in [
        format!("/admin/lost/{}/delete", lost.id),
        format!("/admin/found/{}/delete", found.id),
        "/admin/lost/9999/delete".to_string(),
        "/admin/lost/99999999999/delete".to_string(),
        "/admin/found/99999999999/delete".to_string(),
    ] {
        let response = app
            .clone()
            .oneshot(post_form(&uri, "", Some(&admin_cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin");
    }

    assert!(state.store().fetch_lost_items().await.unwrap().is_empty());
    assert!(state.store().fetch_found_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn logout_returns_to_logged_out_state() {
    let (_, app) = spawn_app().await;
    let cookie = login(&app, "admin", "admin").await;

    let response = app
        .clone()
        .oneshot(get("/logout", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("logged out"));

    let response = app
        .clone()
        .oneshot(get("/report-lost", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Logging out without ever logging in still succeeds.
    let response = app
        .clone()
        .oneshot(post_form("/logout", "", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn menu_selection_redirects_to_page() {
    let (_, app) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(get("/menu?choice=Report%20Lost", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/report-lost");

    let response = app
        .clone()
        .oneshot(get("/menu?choice=Settings", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_pings_database() {
    let (_, app) = spawn_app().await;

    let response = app.clone().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}
