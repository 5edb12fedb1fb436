//! HTTP-level tests for spaces, membership, visibility and module gates.

mod common;

use agora_core::roles::{ROLE_ADMIN, ROLE_MEMBER, ROLE_MODERATOR};
use agora_db::models::space::UpdateSpace;
use agora_db::repositories::SpaceRepo;
use axum::http::StatusCode;
use common::{
    body_json, create_space, create_user, delete_auth, get, get_auth, post_auth, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_creates_space_with_default_description(pool: PgPool) {
    let (_, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Vigo", "slug": "vigo", "public": true, "mod_debate": true });
    let response = post_json_auth(app, "/api/v1/spaces", &admin, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "vigo");
    assert_eq!(json["data"]["description"], "Write here your description.");
    assert_eq!(json["data"]["mod_debate"], true);
    assert_eq!(json["data"]["mod_news"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn space_slug_with_invalid_characters_is_rejected(pool: PgPool) {
    let (_, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    for slug in ["Vigo", "vigo-2012", "vigo.es", "sp ace", ""] {
        let body = serde_json::json!({ "name": "Vigo", "slug": slug });
        let response = post_json_auth(app.clone(), "/api/v1/spaces", &admin, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "slug {slug:?}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_admins_manage_spaces(pool: PgPool) {
    let (_, moderator) = create_user(&pool, "mod", ROLE_MODERATOR).await;
    let (_, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Vigo", "slug": "vigo" });
    for token in [&moderator, &member] {
        let response = post_json_auth(app.clone(), "/api/v1/spaces", token, body.clone()).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_slug_conflicts(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Another", "slug": "vigo" });
    let response = post_json_auth(app, "/api/v1/spaces", &admin, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "A space with this slug already exists"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_depends_on_caller(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (member_id, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    create_space(&pool, admin_id, "open", true).await;
    let private = create_space(&pool, admin_id, "closed", false).await;
    create_space(&pool, admin_id, "secret", false).await;
    SpaceRepo::add_member(&pool, private.id, member_id).await.unwrap();
    let app = common::build_test_app(pool);

    let slugs = |json: serde_json::Value| -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["slug"].as_str().unwrap().to_string())
            .collect()
    };

    let anonymous = slugs(body_json(get(app.clone(), "/api/v1/spaces").await).await);
    assert_eq!(anonymous, vec!["open"]);

    let mut as_member = slugs(body_json(get_auth(app.clone(), "/api/v1/spaces", &member).await).await);
    as_member.sort();
    assert_eq!(as_member, vec!["closed", "open"]);

    let as_admin = slugs(body_json(get_auth(app, "/api/v1/spaces", &admin).await).await);
    assert_eq!(as_admin.len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn private_space_requires_membership(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (member_id, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    let (_, outsider) = create_user(&pool, "outsider", ROLE_MEMBER).await;
    let space = create_space(&pool, admin_id, "closed", false).await;
    SpaceRepo::add_member(&pool, space.id, member_id).await.unwrap();
    let app = common::build_test_app(pool);

    let uri = "/api/v1/spaces/closed";
    assert_eq!(get(app.clone(), uri).await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(get_auth(app.clone(), uri, &outsider).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(get_auth(app.clone(), uri, &member).await.status(), StatusCode::OK);
    assert_eq!(get_auth(app, uri, &admin).await.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_space_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/spaces/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Space 'nowhere' not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_keeps_slug_and_delete_removes(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Vigo 2026", "slug": "ignored", "mod_news": false });
    let response = put_json_auth(app.clone(), "/api/v1/spaces/vigo", &admin, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Vigo 2026");
    assert_eq!(json["data"]["slug"], "vigo");
    assert_eq!(json["data"]["mod_news"], false);

    let response = delete_auth(app.clone(), "/api/v1/spaces/vigo", &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(app, "/api/v1/spaces/vigo").await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn join_and_leave_update_profile_spaces(pool: PgPool) {
    let (admin_id, _) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (_, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    let space = create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let response = post_auth(app.clone(), "/api/v1/spaces/vigo/join", &member).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let profile = body_json(get_auth(app.clone(), "/api/v1/profile", &member).await).await;
    assert_eq!(profile["data"]["space_ids"], serde_json::json!([space.id]));

    let response = post_auth(app.clone(), "/api/v1/spaces/vigo/leave", &member).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let profile = body_json(get_auth(app, "/api/v1/profile", &member).await).await;
    assert_eq!(profile["data"]["space_ids"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn disabled_module_is_forbidden(pool: PgPool) {
    let (admin_id, _) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let space = create_space(&pool, admin_id, "vigo", true).await;
    let update = UpdateSpace {
        mod_debate: Some(false),
        ..UpdateSpace::default()
    };
    SpaceRepo::update(&pool, space.id, &update).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/spaces/vigo/debate").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "The debate module is disabled for this space");

    // Other modules stay available.
    let response = get(app, "/api/v1/spaces/vigo/news").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_manages_entities(pool: PgPool) {
    let (admin_id, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (_, member) = create_user(&pool, "member", ROLE_MEMBER).await;
    create_space(&pool, admin_id, "vigo", true).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Concello", "website": "https://vigo.org" });
    let response =
        post_json_auth(app.clone(), "/api/v1/spaces/vigo/entities", &member, body.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app.clone(), "/api/v1/spaces/vigo/entities", &admin, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let list = body_json(get(app.clone(), "/api/v1/spaces/vigo/entities").await).await;
    assert_eq!(list["data"][0]["name"], "Concello");

    let uri = format!("/api/v1/spaces/vigo/entities/{id}");
    let response = delete_auth(app.clone(), &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
