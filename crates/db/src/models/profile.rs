//! User profile and interest models.
//!
//! A profile is composed with a user (`user_profiles.user_id`), never
//! merged into the `users` row.

use agora_core::profile::Gender;
use agora_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub firstname: String,
    pub surname: String,
    /// `"M"` or `"F"`.
    pub gender: Option<String>,
    pub birthdate: Option<Date>,
    pub province: String,
    pub region: String,
    pub neighborhood: String,
    pub address: String,
    pub address_number: Option<String>,
    pub address_floor: String,
    pub address_letter: Option<String>,
    pub phone: Option<String>,
    pub phone_alt: Option<String>,
    pub nid: Option<String>,
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Partial update of the caller's own profile.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserProfile {
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<Date>,
    pub province: Option<String>,
    pub region: Option<String>,
    pub neighborhood: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub address_floor: Option<String>,
    pub address_letter: Option<String>,
    pub phone: Option<String>,
    pub phone_alt: Option<String>,
    pub nid: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

/// The caller's own profile with derived and related data.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Whole years since birthdate; `null` when the birthdate is unknown.
    pub age: Option<i32>,
    pub interests: Vec<Interest>,
    pub space_ids: Vec<DbId>,
}

/// Fields of another user's profile visible to everyone.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub user_id: DbId,
    pub firstname: String,
    pub surname: String,
    pub province: String,
    pub region: String,
    pub website: Option<String>,
    pub interests: Vec<Interest>,
}

impl PublicProfile {
    pub fn new(profile: UserProfile, interests: Vec<Interest>) -> Self {
        Self {
            user_id: profile.user_id,
            firstname: profile.firstname,
            surname: profile.surname,
            province: profile.province,
            region: profile.region,
            website: profile.website,
            interests,
        }
    }

    /// Profile of a user who has never filled one in.
    pub fn blank(user_id: DbId, interests: Vec<Interest>) -> Self {
        Self {
            user_id,
            firstname: String::new(),
            surname: String::new(),
            province: String::new(),
            region: String::new(),
            website: None,
            interests,
        }
    }
}

/// A row from the `interests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interest {
    pub id: DbId,
    pub item: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateInterest {
    pub item: String,
}

/// Replace the caller's interest set.
#[derive(Debug, Deserialize)]
pub struct SetInterests {
    pub interest_ids: Vec<DbId>,
}
