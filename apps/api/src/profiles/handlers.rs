use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profiles::models::{
    normalize_mobile, trial_window, FreeTrialRow, ProfileInput, ProfileRow,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MobileQuery {
    pub mobile_number: String,
}

#[derive(Debug, Serialize)]
pub struct TrialEligibility {
    pub eligible: bool,
    pub active: bool,
    pub trial: Option<FreeTrialRow>,
}

fn parse_mobile(raw: &str) -> Result<String, AppError> {
    normalize_mobile(raw)
        .ok_or_else(|| AppError::Validation(format!("'{raw}' is not a valid mobile number")))
}

async fn find_trial(
    state: &AppState,
    user_id: Uuid,
    mobile: &str,
) -> Result<Option<FreeTrialRow>, AppError> {
    let row = sqlx::query_as::<_, FreeTrialRow>(
        r#"
        SELECT * FROM free_trial_usage
        WHERE mobile_number = $1 OR user_id = $2
        ORDER BY trial_started_at DESC
        LIMIT 1
        "#,
    )
    .bind(mobile)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?;
    Ok(row)
}

/// PUT /api/v1/profiles/:user_id
///
/// Creating a profile leaves it awaiting admin approval; editing one keeps its
/// approval state.
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<ProfileInput>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = req
        .clean(|role| state.catalog.contains(role))
        .map_err(AppError::Validation)?;

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (user_id, name, role, bio, interests, email, mobile_number, approved)
        VALUES ($1, $2, $3, $4, $5, $6, $7, false)
        ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            role = EXCLUDED.role,
            bio = EXCLUDED.bio,
            interests = EXCLUDED.interests,
            email = EXCLUDED.email,
            mobile_number = EXCLUDED.mobile_number,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&profile.name)
    .bind(&profile.role)
    .bind(&profile.bio)
    .bind(&profile.interests)
    .bind(&profile.email)
    .bind(&profile.mobile_number)
    .fetch_one(&state.db)
    .await?;

    info!("Profile saved for user {user_id} ({})", row.role);
    Ok(Json(row))
}

/// GET /api/v1/profiles/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileRow>, AppError> {
    let row = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/profiles/:user_id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut tx = state.db.begin().await?;

    sqlx::query("DELETE FROM trust_scores WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    let deleted = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    if deleted == 0 {
        return Err(AppError::NotFound(format!(
            "Profile for user {user_id} not found"
        )));
    }
    info!("Deleted profile for user {user_id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profiles/:user_id/trial?mobile_number=
pub async fn handle_trial_eligibility(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<MobileQuery>,
) -> Result<Json<TrialEligibility>, AppError> {
    let mobile = parse_mobile(&query.mobile_number)?;
    let trial = find_trial(&state, user_id, &mobile).await?;
    let active = trial
        .as_ref()
        .is_some_and(|t| t.user_id == user_id && t.is_active(Utc::now()));

    Ok(Json(TrialEligibility {
        eligible: trial.is_none(),
        active,
        trial,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StartTrialRequest {
    pub mobile_number: String,
}

/// POST /api/v1/profiles/:user_id/trial
pub async fn handle_start_trial(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<StartTrialRequest>,
) -> Result<(StatusCode, Json<FreeTrialRow>), AppError> {
    let mobile = parse_mobile(&req.mobile_number)?;

    if find_trial(&state, user_id, &mobile).await?.is_some() {
        return Err(AppError::UnprocessableEntity(
            "A free trial has already been used for this account or mobile number".to_string(),
        ));
    }

    let (starts, expires) = trial_window(Utc::now());
    // The unique index on mobile_number settles concurrent starts.
    let row = sqlx::query_as::<_, FreeTrialRow>(
        r#"
        INSERT INTO free_trial_usage (user_id, mobile_number, trial_started_at, trial_expires_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (mobile_number) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&mobile)
    .bind(starts)
    .bind(expires)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::UnprocessableEntity(
            "A free trial has already been used for this mobile number".to_string(),
        )
    })?;

    info!("Free trial started for user {user_id} until {}", row.trial_expires_at);
    Ok((StatusCode::CREATED, Json(row)))
}
