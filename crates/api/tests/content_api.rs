//! HTTP-level tests for news posts, static pages and calendar events.

mod common;

use agora_core::roles::{ROLE_ADMIN, ROLE_MEMBER, ROLE_MODERATOR};
use axum::http::StatusCode;
use common::{
    body_json, create_space, create_user, delete_auth, get, post_auth, post_json_auth,
    put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn news_lifecycle(pool: PgPool) {
    let (admin_id, _) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (_, moderator) = create_user(&pool, "mod", ROLE_MODERATOR).await;
    let (_, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let body = json!({ "title": "Assembly on Friday", "description": "At the town hall." });
    let response = post_json_auth(app.clone(), "/api/v1/spaces/vigo/news", &member, body.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app.clone(), "/api/v1/spaces/vigo/news", &moderator, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await["data"]["id"].as_i64().unwrap();

    let body = json!({ "title": "Results", "description": "Thanks for voting." });
    post_json_auth(app.clone(), "/api/v1/spaces/vigo/news", &moderator, body).await;

    // Newest first.
    let list = body_json(get(app.clone(), "/api/v1/spaces/vigo/news").await).await;
    assert_eq!(list["data"][0]["title"], "Results");
    assert_eq!(list["data"][1]["id"], first);

    let uri = format!("/api/v1/spaces/vigo/news/{first}");
    let response = put_json_auth(app.clone(), &uri, &moderator, json!({ "title": "Assembly moved" })).await;
    assert_eq!(body_json(response).await["data"]["title"], "Assembly moved");

    let response = delete_auth(app.clone(), &uri, &moderator).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn pages_are_addressed_by_uri(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let body = json!({ "title": "About", "uri": "about_us", "content": "<p>Hello</p>" });
    let response = post_json_auth(app.clone(), "/api/v1/spaces/vigo/pages", &admin, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app.clone(), "/api/v1/spaces/vigo/pages", &admin, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let page = body_json(get(app.clone(), "/api/v1/spaces/vigo/pages/about_us").await).await;
    assert_eq!(page["data"]["content"], "<p>Hello</p>");

    let response = put_json_auth(
        app.clone(),
        "/api/v1/spaces/vigo/pages/about_us",
        &admin,
        json!({ "uri": "about" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        get(app.clone(), "/api/v1/spaces/vigo/pages/about_us").await.status(),
        StatusCode::NOT_FOUND
    );

    let response = delete_auth(app, "/api/v1/spaces/vigo/pages/about", &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn page_uri_follows_slug_charset(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let body = json!({ "title": "About", "uri": "About-Us" });
    let response = post_json_auth(app, "/api/v1/spaces/vigo/pages", &admin, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn events_are_ordered_by_date_and_track_attendance(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (_, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    for (title, date) in [("Later", "2026-12-01"), ("Sooner", "2026-11-01")] {
        let body = json!({ "title": title, "event_date": date, "location": "Town hall" });
        let response = post_json_auth(app.clone(), "/api/v1/spaces/vigo/events", &admin, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get(app.clone(), "/api/v1/spaces/vigo/events").await).await;
    assert_eq!(list["data"][0]["title"], "Sooner");
    let id = list["data"][0]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/spaces/vigo/events/{id}");
    let response = post_auth(app.clone(), &format!("{uri}/attend"), &member).await;
    assert_eq!(body_json(response).await["data"]["attendee_count"], 1);

    // Attending twice does not count twice.
    let response = post_auth(app.clone(), &format!("{uri}/attend"), &member).await;
    assert_eq!(body_json(response).await["data"]["attendee_count"], 1);

    let response = post_auth(app.clone(), &format!("{uri}/unattend"), &member).await;
    assert_eq!(body_json(response).await["data"]["attendee_count"], 0);

    let response = put_json_auth(app.clone(), &uri, &member, json!({ "title": "Mine" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);
}
