//! Repository for the `user_profiles` table.

use agora_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{UpdateUserProfile, UserProfile};

const COLUMNS: &str = "id, user_id, firstname, surname, gender, birthdate, province, region, \
    neighborhood, address, address_number, address_floor, address_letter, phone, phone_alt, \
    nid, website, created_at, updated_at";

/// Provides profile operations keyed by user ID.
pub struct ProfileRepo;

impl ProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the user's profile, creating an empty one on first access.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<UserProfile, sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_profiles (user_id) VALUES ($1)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update to an existing profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateUserProfile,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET
                firstname = COALESCE($2, firstname),
                surname = COALESCE($3, surname),
                gender = COALESCE($4, gender),
                birthdate = COALESCE($5, birthdate),
                province = COALESCE($6, province),
                region = COALESCE($7, region),
                neighborhood = COALESCE($8, neighborhood),
                address = COALESCE($9, address),
                address_number = COALESCE($10, address_number),
                address_floor = COALESCE($11, address_floor),
                address_letter = COALESCE($12, address_letter),
                phone = COALESCE($13, phone),
                phone_alt = COALESCE($14, phone_alt),
                nid = COALESCE($15, nid),
                website = COALESCE($16, website)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(&input.firstname)
            .bind(&input.surname)
            .bind(input.gender.map(|g| g.code()))
            .bind(input.birthdate)
            .bind(&input.province)
            .bind(&input.region)
            .bind(&input.neighborhood)
            .bind(&input.address)
            .bind(&input.address_number)
            .bind(&input.address_floor)
            .bind(&input.address_letter)
            .bind(&input.phone)
            .bind(&input.phone_alt)
            .bind(&input.nid)
            .bind(&input.website)
            .fetch_optional(pool)
            .await
    }
}
