//! HTTP-level tests for profiles and interests.

mod common;

use agora_core::roles::{ROLE_ADMIN, ROLE_MEMBER};
use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::{body_json, create_user, get, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_is_created_on_first_read(pool: PgPool) {
    let (user_id, token) = create_user(&pool, "ana", ROLE_MEMBER).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], user_id);
    assert_eq!(json["data"]["firstname"], "");
    assert!(json["data"]["age"].is_null());
    assert_eq!(json["data"]["interests"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_derives_age(pool: PgPool) {
    let (_, token) = create_user(&pool, "ana", ROLE_MEMBER).await;
    let app = common::build_test_app(pool);

    // Born on Jan 1st thirty years ago: the birthday has always passed.
    let year = Utc::now().year() - 30;
    let body = json!({
        "firstname": "Ana",
        "gender": "F",
        "birthdate": format!("{year}-01-01"),
        "phone": "986123456",
        "website": "https://ana.example.com",
    });
    let response = put_json_auth(app, "/api/v1/profile", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["firstname"], "Ana");
    assert_eq!(json["data"]["gender"], "F");
    assert_eq!(json["data"]["age"], 30);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_profile_fields_are_rejected(pool: PgPool) {
    let (_, token) = create_user(&pool, "ana", ROLE_MEMBER).await;
    let app = common::build_test_app(pool);

    for body in [
        json!({ "phone": "+34986123456" }),
        json!({ "address_number": "1234" }),
        json!({ "website": "not a url" }),
        json!({ "province": "p".repeat(51) }),
    ] {
        let response = put_json_auth(app.clone(), "/api/v1/profile", &token, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_profile_hides_private_fields(pool: PgPool) {
    let (user_id, token) = create_user(&pool, "ana", ROLE_MEMBER).await;
    let app = common::build_test_app(pool);

    let body = json!({ "firstname": "Ana", "phone": "986123456", "nid": "12345678Z" });
    put_json_auth(app.clone(), "/api/v1/profile", &token, body).await;

    let response = get(app.clone(), &format!("/api/v1/profiles/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["firstname"], "Ana");
    assert!(json["data"].get("phone").is_none());
    assert!(json["data"].get("nid").is_none());

    assert_eq!(
        get(app, "/api/v1/profiles/999999").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reading_someone_elses_profile_does_not_create_it(pool: PgPool) {
    let (user_id, _) = create_user(&pool, "ana", ROLE_MEMBER).await;
    let app = common::build_test_app(pool.clone());

    let response = get(app, &format!("/api/v1/profiles/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], user_id);
    assert_eq!(json["data"]["firstname"], "");
    assert_eq!(json["data"]["interests"], json!([]));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn interests_catalogue_and_selection(pool: PgPool) {
    let (_, admin) = create_user(&pool, "admin", ROLE_ADMIN).await;
    let (_, member) = create_user(&pool, "ana", ROLE_MEMBER).await;
    let app = common::build_test_app(pool);

    let response =
        post_json_auth(app.clone(), "/api/v1/interests", &member, json!({ "item": "Cycling" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let mut ids = Vec::new();
    for item in ["Cycling", "Urbanism"] {
        let response =
            post_json_auth(app.clone(), "/api/v1/interests", &admin, json!({ "item": item })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(body_json(response).await["data"]["id"].as_i64().unwrap());
    }

    let response =
        post_json_auth(app.clone(), "/api/v1/interests", &admin, json!({ "item": "Cycling" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let catalogue = body_json(get(app.clone(), "/api/v1/interests").await).await;
    assert_eq!(catalogue["data"].as_array().unwrap().len(), 2);

    // Duplicates collapse; unknown ids are rejected.
    let body = json!({ "interest_ids": [ids[0], ids[0], ids[1]] });
    let response = put_json_auth(app.clone(), "/api/v1/profile/interests", &member, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let body = json!({ "interest_ids": [ids[0], 999_999] });
    let response = put_json_auth(app.clone(), "/api/v1/profile/interests", &member, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let profile = body_json(get_auth(app, "/api/v1/profile", &member).await).await;
    assert_eq!(profile["data"]["interests"][0]["item"], "Cycling");
}
