use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::trust::{recalculate, TrustScoreRow};

#[derive(Debug, Serialize)]
pub struct TrustBadgeResponse {
    #[serde(flatten)]
    pub score: TrustScoreRow,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<TrustScoreRow> for TrustBadgeResponse {
    fn from(score: TrustScoreRow) -> Self {
        let level = score.level();
        Self {
            score,
            label: level.label(),
            description: level.description(),
        }
    }
}

/// GET /api/v1/trust/:user_id
pub async fn handle_get_trust(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TrustBadgeResponse>, AppError> {
    let stored = sqlx::query_as::<_, TrustScoreRow>(
        r#"
        SELECT user_id, avg_teaching_rating, avg_communication_rating, avg_knowledge_rating,
               overall_score, total_reviews, completed_sessions, trust_level, last_calculated
        FROM trust_scores
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?;

    let score = stored.unwrap_or_else(|| TrustScoreRow::newbie(user_id));
    Ok(Json(score.into()))
}

/// POST /api/v1/trust/:user_id/recalculate
pub async fn handle_recalculate_trust(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TrustBadgeResponse>, AppError> {
    let mut conn = state.db.acquire().await?;
    let score = recalculate(&mut conn, user_id).await?;
    Ok(Json(score.into()))
}
