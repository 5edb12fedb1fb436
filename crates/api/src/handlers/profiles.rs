//! Handlers for user profiles and interests.
//!
//! A profile row is created empty the first time its owner reads it.

use agora_core::error::CoreError;
use agora_core::fields::limit_text;
use agora_core::profile::{
    age_on, validate_interest, validate_locality, validate_phone, MAX_ADDRESS_LENGTH,
    MAX_ADDRESS_LETTER_LENGTH, MAX_ADDRESS_NUMBER_LENGTH, MAX_FIRSTNAME_LENGTH, MAX_NID_LENGTH,
    MAX_SURNAME_LENGTH,
};
use agora_core::types::DbId;
use agora_db::models::profile::{
    CreateInterest, Interest, ProfileResponse, PublicProfile, SetInterests, UpdateUserProfile,
    UserProfile,
};
use agora_db::repositories::{InterestRepo, ProfileRepo, SpaceRepo, UserRepo};
use agora_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Own profile
// ---------------------------------------------------------------------------

/// GET /api/v1/profile
pub async fn get_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = ProfileRepo::get_or_create(&state.pool, auth.user_id).await?;
    let response = profile_response(&state.pool, profile).await?;
    Ok(Json(DataResponse { data: response }))
}

/// PUT /api/v1/profile
///
/// Partial update; omitted fields keep their value.
pub async fn update_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateUserProfile>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    input
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    validate_profile_fields(&input).map_err(AppError::validation)?;

    ProfileRepo::get_or_create(&state.pool, auth.user_id).await?;
    let profile = ProfileRepo::update(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    let response = profile_response(&state.pool, profile).await?;
    Ok(Json(DataResponse { data: response }))
}

/// PUT /api/v1/profile/interests
///
/// Replaces the caller's interest set. Every id must exist.
pub async fn set_my_interests(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<SetInterests>,
) -> AppResult<Json<DataResponse<Vec<Interest>>>> {
    let mut ids = input.interest_ids;
    ids.sort_unstable();
    ids.dedup();

    let existing = InterestRepo::count_existing(&state.pool, &ids).await?;
    if existing != ids.len() as i64 {
        return Err(AppError::validation("Unknown interest id"));
    }

    ProfileRepo::get_or_create(&state.pool, auth.user_id).await?;
    InterestRepo::set_for_user(&state.pool, auth.user_id, &ids).await?;

    tracing::info!(user_id = auth.user_id, count = ids.len(), "Interests updated");

    let interests = InterestRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: interests }))
}

// ---------------------------------------------------------------------------
// Other users
// ---------------------------------------------------------------------------

/// GET /api/v1/profiles/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<PublicProfile>>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    // Anonymous reads never create the row.
    let profile = ProfileRepo::find_by_user(&state.pool, user.id).await?;
    let interests = InterestRepo::list_for_user(&state.pool, user.id).await?;
    let data = match profile {
        Some(profile) => PublicProfile::new(profile, interests),
        None => PublicProfile::blank(user.id, interests),
    };

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Interests
// ---------------------------------------------------------------------------

/// GET /api/v1/interests
pub async fn list_interests(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Interest>>>> {
    let interests = InterestRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: interests }))
}

/// POST /api/v1/interests
pub async fn create_interest(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInterest>,
) -> AppResult<(StatusCode, Json<DataResponse<Interest>>)> {
    validate_interest(&input.item).map_err(AppError::validation)?;

    let interest = InterestRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = admin.user_id, interest_id = interest.id, "Interest created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: interest })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn profile_response(pool: &DbPool, profile: UserProfile) -> AppResult<ProfileResponse> {
    let interests = InterestRepo::list_for_user(pool, profile.user_id).await?;
    let space_ids = SpaceRepo::list_member_space_ids(pool, profile.user_id).await?;
    let age = age_on(profile.birthdate, Utc::now().date_naive());
    Ok(ProfileResponse {
        profile,
        age,
        interests,
        space_ids,
    })
}

fn validate_profile_fields(input: &UpdateUserProfile) -> Result<(), String> {
    let limits: [(&str, &Option<String>, usize); 6] = [
        ("First name", &input.firstname, MAX_FIRSTNAME_LENGTH),
        ("Surname", &input.surname, MAX_SURNAME_LENGTH),
        ("Address", &input.address, MAX_ADDRESS_LENGTH),
        ("Address number", &input.address_number, MAX_ADDRESS_NUMBER_LENGTH),
        ("Address letter", &input.address_letter, MAX_ADDRESS_LETTER_LENGTH),
        ("National ID", &input.nid, MAX_NID_LENGTH),
    ];
    for (field, value, max) in limits {
        if let Some(value) = value {
            limit_text(field, value, max)?;
        }
    }

    for (field, value) in [
        ("Province", &input.province),
        ("Region", &input.region),
        ("Neighborhood", &input.neighborhood),
    ] {
        if let Some(value) = value {
            validate_locality(field, value)?;
        }
    }

    for (field, value) in [("Phone 1", &input.phone), ("Phone 2", &input.phone_alt)] {
        if let Some(value) = value {
            validate_phone(field, value)?;
        }
    }
    Ok(())
}
