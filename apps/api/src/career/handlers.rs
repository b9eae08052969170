//! Axum route handlers for the Career API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use tracing::info;
use uuid::Uuid;

use crate::career::{CareerProfile, MatchResult, Question};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub id: Question,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "lenient_answers")]
    pub answers: Vec<Option<String>>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub matches: Vec<MatchResult>,
    pub answered: usize,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub user_id: Uuid,
    #[serde(default, deserialize_with = "lenient_answers")]
    pub answers: Vec<Option<String>>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerAssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answers: Value,
    pub matches: Value,
    pub top_match: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Accepts any JSON for `answers`. Non-string entries become unanswered
/// slots and a non-array value means no answers at all.
fn lenient_answers<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/career/questions
pub async fn handle_list_questions(State(state): State<AppState>) -> Json<Vec<QuestionView>> {
    Json(
        state
            .catalog
            .questions()
            .iter()
            .map(|&q| QuestionView {
                index: q.index(),
                id: q,
                question: q.prompt(),
                options: q.options(),
            })
            .collect(),
    )
}

/// GET /api/v1/career/profiles
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<Vec<CareerProfile>> {
    Json(state.catalog.profiles().to_vec())
}

/// POST /api/v1/career/score
///
/// Stateless scoring. Unknown or missing answers score nothing; never a 4xx.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let scored = state.catalog.score_raw(&request.answers, request.top_k);
    Json(ScoreResponse {
        answered: scored.answers.answered(),
        matches: scored.matches,
    })
}

/// POST /api/v1/career/assessments
///
/// Scores and records the attempt in the user's assessment history.
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<CareerAssessmentRow>, AppError> {
    let scored = state.catalog.score_raw(&request.answers, request.top_k);
    let canonical = scored.answers.to_raw();
    let top_match = scored.matches.first().map(|m| m.profile.title.clone());

    let row = sqlx::query_as::<_, CareerAssessmentRow>(
        r#"
        INSERT INTO career_assessments (user_id, answers, matches, top_match)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(serde_json::to_value(&canonical).map_err(anyhow::Error::from)?)
    .bind(serde_json::to_value(&scored.matches).map_err(anyhow::Error::from)?)
    .bind(&top_match)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Recorded career assessment {} for user {} (top match: {:?})",
        row.id, request.user_id, top_match
    );

    Ok(Json(row))
}

/// GET /api/v1/career/assessments?user_id=
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CareerAssessmentRow>>, AppError> {
    let rows = sqlx::query_as::<_, CareerAssessmentRow>(
        "SELECT * FROM career_assessments WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_string_answers_become_unanswered() {
        let req: ScoreRequest = serde_json::from_str(
            r#"{"answers":[1,"Collaborative team settings",true,{},null,["x"]]}"#,
        )
        .unwrap();
        assert_eq!(
            req.answers,
            vec![
                None,
                Some("Collaborative team settings".to_string()),
                None,
                None,
                None,
                None
            ]
        );
    }

    #[test]
    fn test_null_or_scalar_answers_mean_no_answers() {
        for body in [r#"{"answers":null}"#, r#"{"answers":"oops"}"#, r#"{"answers":7}"#, "{}"] {
            let req: ScoreRequest = serde_json::from_str(body).unwrap();
            assert!(req.answers.is_empty(), "{body}");
        }
    }
}
