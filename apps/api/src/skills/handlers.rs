//! Axum route handlers for the skill-exchange marketplace.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::skills::models::{
    ApprovalStatus, PeerReviewRow, QuizAttemptRow, RequestStatus, SessionStatus,
    SkillOfferingRow, SkillQuizRow, SkillRequestRow, SkillSwapSessionRow,
};
use crate::skills::quiz::{self, PublicQuizQuestion, QuizError, QuizGrade, TIME_LIMIT_SECONDS};
use crate::skills::validation::{
    join_issues, normalize_feedback, validate_offering, validate_ratings, NewOffering,
    ReviewRatingsInput, DEFAULT_DURATION_MINUTES, DEFAULT_MAX_LEARNERS,
};
use crate::state::AppState;
use crate::trust;

const RESPOND_PENDING_REQUEST_SQL: &str = r#"
    UPDATE skill_requests SET status = $1, updated_at = now()
    WHERE id = $2 AND status = 'pending'
    RETURNING *
"#;

const COMPLETE_PENDING_SESSION_SQL: &str = r#"
    UPDATE skill_swap_sessions SET status = $1, updated_at = now()
    WHERE id = $2 AND status = 'pending'
    RETURNING *
"#;

const INSERT_REVIEW_ONCE_SQL: &str = r#"
    INSERT INTO peer_reviews
        (session_id, reviewer_id, reviewee_id, teaching_rating, communication_rating,
         knowledge_rating, overall_rating, written_feedback, is_teacher_review)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    ON CONFLICT (session_id, reviewer_id) DO NOTHING
    RETURNING *
"#;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OfferingFilter {
    pub category: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizLookup {
    pub category: String,
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct QuizView {
    pub id: Uuid,
    pub skill_category: String,
    pub skill_level: String,
    pub passing_score: i32,
    pub time_limit_seconds: i32,
    pub questions: Vec<PublicQuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct QuizAttemptRequest {
    pub user_id: Uuid,
    pub skill_offering_id: Option<Uuid>,
    pub answers: Vec<i32>,
    pub time_taken_seconds: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct QuizAttemptResponse {
    pub attempt: QuizAttemptRow,
    #[serde(flatten)]
    pub grade: QuizGrade,
}

#[derive(Debug, Deserialize)]
pub struct NewSkillRequest {
    pub skill_offering_id: Uuid,
    pub requester_id: Uuid,
    pub message: Option<String>,
    pub requested_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct RespondToRequest {
    pub teacher_id: Uuid,
    pub accept: bool,
    /// Overrides the learner's requested date when accepting.
    pub session_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub request: SkillRequestRow,
    pub session: Option<SkillSwapSessionRow>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CompleteSessionRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct NewReview {
    pub session_id: Uuid,
    pub reviewer_id: Uuid,
    #[serde(flatten)]
    pub ratings: ReviewRatingsInput,
    pub written_feedback: Option<String>,
}

impl From<QuizError> for AppError {
    fn from(e: QuizError) -> Self {
        AppError::Validation(e.to_string())
    }
}

async fn fetch_offering(state: &AppState, id: Uuid) -> Result<SkillOfferingRow, AppError> {
    sqlx::query_as::<_, SkillOfferingRow>("SELECT * FROM skill_offerings WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Skill offering {id} not found")))
}

async fn fetch_session(state: &AppState, id: Uuid) -> Result<SkillSwapSessionRow, AppError> {
    sqlx::query_as::<_, SkillSwapSessionRow>("SELECT * FROM skill_swap_sessions WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Offerings
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/offerings
pub async fn handle_create_offering(
    State(state): State<AppState>,
    Json(req): Json<NewOffering>,
) -> Result<(StatusCode, Json<SkillOfferingRow>), AppError> {
    let issues = validate_offering(&req);
    if !issues.is_empty() {
        return Err(AppError::Validation(join_issues(&issues)));
    }

    let row = sqlx::query_as::<_, SkillOfferingRow>(
        r#"
        INSERT INTO skill_offerings
            (teacher_id, skill_name, skill_category, target_role, description, level,
             prerequisites, duration_minutes, max_learners, demo_video_url,
             approval_status, demo_video_approved, quiz_passed)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, false, false)
        RETURNING *
        "#,
    )
    .bind(req.teacher_id)
    .bind(req.skill_name.trim())
    .bind(&req.skill_category)
    .bind(&req.target_role)
    .bind(req.description.trim())
    .bind(&req.level)
    .bind(normalize_feedback(req.prerequisites.as_deref()))
    .bind(req.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
    .bind(req.max_learners.unwrap_or(DEFAULT_MAX_LEARNERS))
    .bind(normalize_feedback(req.demo_video_url.as_deref()))
    .bind(ApprovalStatus::Pending.as_str())
    .fetch_one(&state.db)
    .await?;

    info!(
        "Skill offering {} created by {} ({}, pending approval)",
        row.id, row.teacher_id, row.skill_name
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/skills/offerings
///
/// Only approved offerings are listed; filters are optional.
pub async fn handle_list_offerings(
    State(state): State<AppState>,
    Query(filter): Query<OfferingFilter>,
) -> Result<Json<Vec<SkillOfferingRow>>, AppError> {
    let rows = sqlx::query_as::<_, SkillOfferingRow>(
        r#"
        SELECT * FROM skill_offerings
        WHERE approval_status = $1
          AND ($2::text IS NULL OR skill_category = $2)
          AND ($3::text IS NULL OR level = $3)
        ORDER BY created_at DESC
        "#,
    )
    .bind(ApprovalStatus::Approved.as_str())
    .bind(filter.category)
    .bind(filter.level)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/skills/offerings/:id
pub async fn handle_get_offering(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SkillOfferingRow>, AppError> {
    Ok(Json(fetch_offering(&state, id).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Quizzes
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills/quizzes?category=&level=
pub async fn handle_get_quiz(
    State(state): State<AppState>,
    Query(lookup): Query<QuizLookup>,
) -> Result<Json<QuizView>, AppError> {
    let row = sqlx::query_as::<_, SkillQuizRow>(
        r#"
        SELECT * FROM skill_quizzes
        WHERE skill_category = $1 AND skill_level = $2
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(&lookup.category)
    .bind(&lookup.level)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "No quiz for {} at {} level",
            lookup.category, lookup.level
        ))
    })?;

    let questions = quiz::parse_questions(&row.questions)
        .map_err(|e| anyhow::anyhow!("stored quiz {} is invalid: {e}", row.id))?;

    Ok(Json(QuizView {
        id: row.id,
        skill_category: row.skill_category,
        skill_level: row.skill_level,
        passing_score: row.passing_score,
        time_limit_seconds: TIME_LIMIT_SECONDS,
        questions: questions.iter().map(PublicQuizQuestion::from).collect(),
    }))
}

/// POST /api/v1/skills/quizzes/:id/attempts
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Json(req): Json<QuizAttemptRequest>,
) -> Result<Json<QuizAttemptResponse>, AppError> {
    let row = sqlx::query_as::<_, SkillQuizRow>("SELECT * FROM skill_quizzes WHERE id = $1")
        .bind(quiz_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} not found")))?;

    if let Some(offering_id) = req.skill_offering_id {
        let offering = fetch_offering(&state, offering_id).await?;
        if offering.teacher_id != req.user_id {
            return Err(AppError::Forbidden);
        }
    }

    let questions = quiz::parse_questions(&row.questions)
        .map_err(|e| anyhow::anyhow!("stored quiz {} is invalid: {e}", row.id))?;
    let grade = quiz::grade(&questions, &req.answers, row.passing_score)?;

    // Auto-submission at the deadline reports at most the limit.
    let time_taken = req
        .time_taken_seconds
        .map(|t| t.clamp(0, TIME_LIMIT_SECONDS));

    let mut tx = state.db.begin().await?;

    let attempt = sqlx::query_as::<_, QuizAttemptRow>(
        r#"
        INSERT INTO quiz_attempts
            (user_id, quiz_id, skill_offering_id, answers, score, passed, time_taken_seconds)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(req.user_id)
    .bind(quiz_id)
    .bind(req.skill_offering_id)
    .bind(serde_json::json!(req.answers))
    .bind(grade.score)
    .bind(grade.passed)
    .bind(time_taken)
    .fetch_one(&mut *tx)
    .await?;

    if grade.passed {
        if let Some(offering_id) = req.skill_offering_id {
            sqlx::query(
                "UPDATE skill_offerings SET quiz_passed = true, updated_at = now() WHERE id = $1",
            )
            .bind(offering_id)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;

    info!(
        "Quiz {quiz_id} attempt by {}: {}% ({})",
        req.user_id,
        grade.score,
        if grade.passed { "passed" } else { "failed" }
    );
    Ok(Json(QuizAttemptResponse { attempt, grade }))
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/requests
pub async fn handle_create_request(
    State(state): State<AppState>,
    Json(req): Json<NewSkillRequest>,
) -> Result<(StatusCode, Json<SkillRequestRow>), AppError> {
    let offering = fetch_offering(&state, req.skill_offering_id).await?;

    if offering.approval_status != ApprovalStatus::Approved.as_str() {
        return Err(AppError::UnprocessableEntity(
            "This skill offering is not open for requests".to_string(),
        ));
    }
    if offering.teacher_id == req.requester_id {
        return Err(AppError::Validation(
            "You cannot request your own skill offering".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, SkillRequestRow>(
        r#"
        INSERT INTO skill_requests (skill_offering_id, requester_id, message, requested_date, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(offering.id)
    .bind(req.requester_id)
    .bind(normalize_feedback(req.message.as_deref()))
    .bind(req.requested_date)
    .bind(RequestStatus::Pending.as_str())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/skills/requests/:id/respond
///
/// Only the offering's teacher may respond, and only once.
pub async fn handle_respond_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RespondToRequest>,
) -> Result<Json<RespondResponse>, AppError> {
    let request = sqlx::query_as::<_, SkillRequestRow>("SELECT * FROM skill_requests WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Skill request {id} not found")))?;

    let offering = fetch_offering(&state, request.skill_offering_id).await?;
    if offering.teacher_id != req.teacher_id {
        return Err(AppError::Forbidden);
    }
    if request.status != RequestStatus::Pending.as_str() {
        return Err(AppError::UnprocessableEntity(format!(
            "Request has already been {}",
            request.status
        )));
    }

    let status = if req.accept {
        RequestStatus::Accepted
    } else {
        RequestStatus::Declined
    };

    let mut tx = state.db.begin().await?;

    // A concurrent response may have won since the read above.
    let updated = sqlx::query_as::<_, SkillRequestRow>(RESPOND_PENDING_REQUEST_SQL)
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::UnprocessableEntity("Request has already been answered".to_string())
        })?;

    let session = if req.accept {
        let session_date = req
            .session_date
            .or(request.requested_date)
            .unwrap_or_else(Utc::now);
        let session = sqlx::query_as::<_, SkillSwapSessionRow>(
            r#"
            INSERT INTO skill_swap_sessions
                (teacher_id, learner_id, skill_taught, session_date, duration_minutes, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(offering.teacher_id)
        .bind(request.requester_id)
        .bind(&offering.skill_name)
        .bind(session_date)
        .bind(offering.duration_minutes)
        .bind(SessionStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await?;
        Some(session)
    } else {
        None
    };

    tx.commit().await?;

    info!("Skill request {id} {}", status.as_str());
    Ok(Json(RespondResponse {
        request: updated,
        session,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Sessions
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills/sessions?user_id=
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SkillSwapSessionRow>>, AppError> {
    let rows = sqlx::query_as::<_, SkillSwapSessionRow>(
        r#"
        SELECT * FROM skill_swap_sessions
        WHERE teacher_id = $1 OR learner_id = $1
        ORDER BY session_date DESC
        "#,
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// POST /api/v1/skills/sessions/:id/complete
pub async fn handle_complete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CompleteSessionRequest>,
) -> Result<Json<SkillSwapSessionRow>, AppError> {
    let session = fetch_session(&state, id).await?;
    if !session.is_participant(req.user_id) {
        return Err(AppError::Forbidden);
    }
    if session.status != SessionStatus::Pending.as_str() {
        return Err(AppError::UnprocessableEntity(format!(
            "Only pending sessions can be completed (status: {})",
            session.status
        )));
    }

    let mut tx = state.db.begin().await?;

    let updated = sqlx::query_as::<_, SkillSwapSessionRow>(COMPLETE_PENDING_SESSION_SQL)
        .bind(SessionStatus::Completed.as_str())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::UnprocessableEntity("Session is no longer pending".to_string())
        })?;

    trust::recalculate(&mut tx, updated.teacher_id).await?;
    tx.commit().await?;

    info!("Session {id} completed");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Reviews
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/reviews
pub async fn handle_submit_review(
    State(state): State<AppState>,
    Json(req): Json<NewReview>,
) -> Result<(StatusCode, Json<PeerReviewRow>), AppError> {
    let issues = validate_ratings(&req.ratings);
    if !issues.is_empty() {
        return Err(AppError::Validation(join_issues(&issues)));
    }

    let session = fetch_session(&state, req.session_id).await?;
    let reviewee_id = session
        .counterpart(req.reviewer_id)
        .ok_or(AppError::Forbidden)?;
    if session.status != SessionStatus::Completed.as_str() {
        return Err(AppError::UnprocessableEntity(
            "Reviews can only be left for completed sessions".to_string(),
        ));
    }

    let mut tx = state.db.begin().await?;

    let row = sqlx::query_as::<_, PeerReviewRow>(INSERT_REVIEW_ONCE_SQL)
        .bind(session.id)
        .bind(req.reviewer_id)
        .bind(reviewee_id)
        .bind(req.ratings.teaching)
        .bind(req.ratings.communication)
        .bind(req.ratings.knowledge)
        .bind(req.ratings.overall)
        .bind(normalize_feedback(req.written_feedback.as_deref()))
        .bind(reviewee_id == session.teacher_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::UnprocessableEntity("You have already reviewed this session".to_string())
        })?;

    trust::recalculate(&mut tx, reviewee_id).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions_only_apply_to_pending_rows() {
        let pending = format!("status = '{}'", RequestStatus::Pending.as_str());
        assert!(RESPOND_PENDING_REQUEST_SQL.contains(&pending));
        assert!(RESPOND_PENDING_REQUEST_SQL.contains("RETURNING *"));

        let pending = format!("status = '{}'", SessionStatus::Pending.as_str());
        assert!(COMPLETE_PENDING_SESSION_SQL.contains(&pending));
        assert!(COMPLETE_PENDING_SESSION_SQL.contains("RETURNING *"));
    }

    #[test]
    fn test_duplicate_review_yields_no_row() {
        assert!(INSERT_REVIEW_ONCE_SQL.contains("ON CONFLICT (session_id, reviewer_id) DO NOTHING"));
    }
}
