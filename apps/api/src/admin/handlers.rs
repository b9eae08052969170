//! Admin approval queue and dashboard. Every route sits behind `require_admin`.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profiles::models::ProfileRow;
use crate::skills::models::{ApprovalStatus, SessionStatus, SkillOfferingRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApprovalDecision {
    pub approved: bool,
    /// Recorded as `approved_by` on user approvals.
    pub admin_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct AdminStats {
    pub total_users: i64,
    pub approved_users: i64,
    pub new_signups_7d: i64,
    pub completed_sessions: i64,
    pub pending_offerings: i64,
}

/// GET /api/v1/admin/users/pending
pub async fn handle_pending_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    let rows = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT * FROM profiles
        WHERE approved = false AND rejected_at IS NULL
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// POST /api/v1/admin/users/:user_id/approval
pub async fn handle_user_approval(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(decision): Json<ApprovalDecision>,
) -> Result<Json<ProfileRow>, AppError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE profiles SET
            approved = $1,
            approved_at = CASE WHEN $1 THEN now() ELSE NULL END,
            approved_by = CASE WHEN $1 THEN $2 ELSE NULL END,
            rejected_at = CASE WHEN $1 THEN NULL ELSE now() END,
            updated_at = now()
        WHERE user_id = $3
        RETURNING *
        "#,
    )
    .bind(decision.approved)
    .bind(decision.admin_id)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;

    info!(
        "User {} ({}) has been {}",
        user_id,
        row.name,
        if decision.approved { "approved" } else { "rejected" }
    );
    Ok(Json(row))
}

/// GET /api/v1/admin/offerings/pending
pub async fn handle_pending_offerings(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillOfferingRow>>, AppError> {
    let rows = sqlx::query_as::<_, SkillOfferingRow>(
        "SELECT * FROM skill_offerings WHERE approval_status = $1 ORDER BY created_at ASC",
    )
    .bind(ApprovalStatus::Pending.as_str())
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// POST /api/v1/admin/offerings/:id/approval
///
/// Approving an offering also approves its demo video.
pub async fn handle_offering_approval(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(decision): Json<ApprovalDecision>,
) -> Result<Json<SkillOfferingRow>, AppError> {
    let status = if decision.approved {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Rejected
    };

    let row = sqlx::query_as::<_, SkillOfferingRow>(
        r#"
        UPDATE skill_offerings SET
            approval_status = $1,
            demo_video_approved = $2,
            updated_at = now()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(decision.approved)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Skill offering {id} not found")))?;

    info!("Skill offering {id} ({}) {}", row.skill_name, status.as_str());
    Ok(Json(row))
}

/// GET /api/v1/admin/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<AdminStats>, AppError> {
    let stats = sqlx::query_as::<_, AdminStats>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM profiles) AS total_users,
            (SELECT COUNT(*) FROM profiles WHERE approved) AS approved_users,
            (SELECT COUNT(*) FROM profiles WHERE created_at > now() - interval '7 days')
                AS new_signups_7d,
            (SELECT COUNT(*) FROM skill_swap_sessions WHERE status = $1) AS completed_sessions,
            (SELECT COUNT(*) FROM skill_offerings WHERE approval_status = $2) AS pending_offerings
        "#,
    )
    .bind(SessionStatus::Completed.as_str())
    .bind(ApprovalStatus::Pending.as_str())
    .fetch_one(&state.db)
    .await?;
    Ok(Json(stats))
}
