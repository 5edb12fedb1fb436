//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use agora_core::roles::ROLE_MEMBER;
use agora_db::models::space::CreateSpace;
use agora_db::models::space::Space;
use agora_db::models::user::CreateUser;
use agora_db::repositories::{SpaceRepo, UserRepo};
use sqlx::PgPool;

/// Insert a member user and return its ID.
pub async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let email = format!("{username}@example.com");
    let input = CreateUser {
        username,
        email: &email,
        password_hash: "not-a-real-hash",
        role: ROLE_MEMBER,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

pub fn new_space(name: &str, slug: &str) -> CreateSpace {
    CreateSpace {
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        public: Some(true),
        mod_debate: Some(true),
        mod_proposals: Some(true),
        mod_news: Some(true),
        mod_cal: Some(true),
        mod_docs: Some(true),
    }
}

/// Insert a public space with every module enabled.
pub async fn create_space(pool: &PgPool, author_id: i64, slug: &str) -> Space {
    SpaceRepo::create(pool, author_id, &new_space(&format!("Space {slug}"), slug))
        .await
        .unwrap()
}
