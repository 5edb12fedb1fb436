//! Integration tests for profiles and interests.

mod common;

use agora_core::profile::Gender;
use agora_db::models::profile::{CreateInterest, UpdateUserProfile};
use agora_db::repositories::{InterestRepo, ProfileRepo};
use chrono::NaiveDate;
use sqlx::PgPool;

use common::create_user;

#[sqlx::test(migrations = "./migrations")]
async fn test_get_or_create_is_idempotent(pool: PgPool) {
    let user = create_user(&pool, "ana").await;
    assert!(ProfileRepo::find_by_user(&pool, user).await.unwrap().is_none());

    let first = ProfileRepo::get_or_create(&pool, user).await.unwrap();
    let second = ProfileRepo::get_or_create(&pool, user).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.firstname, "");
    assert!(first.birthdate.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update(pool: PgPool) {
    let user = create_user(&pool, "ana").await;
    ProfileRepo::get_or_create(&pool, user).await.unwrap();

    let update = UpdateUserProfile {
        firstname: Some("Ana".to_string()),
        gender: Some(Gender::Female),
        birthdate: NaiveDate::from_ymd_opt(1990, 5, 17),
        ..Default::default()
    };
    let profile = ProfileRepo::update(&pool, user, &update).await.unwrap().unwrap();
    assert_eq!(profile.firstname, "Ana");
    assert_eq!(profile.gender.as_deref(), Some("F"));

    let update = UpdateUserProfile {
        surname: Some("Pérez".to_string()),
        ..Default::default()
    };
    let profile = ProfileRepo::update(&pool, user, &update).await.unwrap().unwrap();
    assert_eq!(profile.firstname, "Ana");
    assert_eq!(profile.surname, "Pérez");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_interest_set_is_replaced(pool: PgPool) {
    let user = create_user(&pool, "ana").await;
    let mut ids = Vec::new();
    for item in ["Transport", "Culture", "Sport"] {
        let interest = InterestRepo::create(
            &pool,
            &CreateInterest {
                item: item.to_string(),
            },
        )
        .await
        .unwrap();
        ids.push(interest.id);
    }

    InterestRepo::set_for_user(&pool, user, &ids[..2]).await.unwrap();
    let items: Vec<_> = InterestRepo::list_for_user(&pool, user)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.item)
        .collect();
    assert_eq!(items, vec!["Culture", "Transport"]);

    InterestRepo::set_for_user(&pool, user, &ids[2..]).await.unwrap();
    let items = InterestRepo::list_for_user(&pool, user).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item, "Sport");

    assert_eq!(InterestRepo::count_existing(&pool, &[ids[0], 9999]).await.unwrap(), 1);
}
