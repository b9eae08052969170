use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use tracing::info;
use uuid::Uuid;

/// Reputation tier shown next to a teacher's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    #[default]
    Newbie,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// (level, minimum completed sessions, minimum overall score), strongest first.
const LEVEL_THRESHOLDS: &[(TrustLevel, i64, f64)] = &[
    (TrustLevel::Platinum, 50, 4.8),
    (TrustLevel::Gold, 25, 4.5),
    (TrustLevel::Silver, 10, 4.0),
    (TrustLevel::Bronze, 3, 3.5),
];

impl TrustLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrustLevel::Newbie => "newbie",
            TrustLevel::Bronze => "bronze",
            TrustLevel::Silver => "silver",
            TrustLevel::Gold => "gold",
            TrustLevel::Platinum => "platinum",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "bronze" => TrustLevel::Bronze,
            "silver" => TrustLevel::Silver,
            "gold" => TrustLevel::Gold,
            "platinum" => TrustLevel::Platinum,
            _ => TrustLevel::Newbie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrustLevel::Newbie => "New Teacher",
            TrustLevel::Bronze => "Bronze Teacher",
            TrustLevel::Silver => "Silver Contributor",
            TrustLevel::Gold => "Gold Expert",
            TrustLevel::Platinum => "Platinum Expert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TrustLevel::Newbie => "Building reputation",
            TrustLevel::Bronze => "Proven skills",
            TrustLevel::Silver => "Experienced teacher",
            TrustLevel::Gold => "Highly trusted teacher",
            TrustLevel::Platinum => "Elite skill teacher",
        }
    }

    pub fn for_record(completed_sessions: i64, overall_score: f64) -> Self {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(_, sessions, score)| completed_sessions >= *sessions && overall_score >= *score)
            .map(|(level, _, _)| *level)
            .unwrap_or_default()
    }
}

/// The rating columns of one peer review received by the user.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRatings {
    pub teaching_rating: i32,
    pub communication_rating: i32,
    pub knowledge_rating: i32,
    pub overall_rating: i32,
    pub is_teacher_review: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustSummary {
    pub avg_teaching_rating: Option<f64>,
    pub avg_communication_rating: Option<f64>,
    pub avg_knowledge_rating: Option<f64>,
    pub overall_score: f64,
    pub total_reviews: i32,
    pub completed_sessions: i32,
    pub trust_level: TrustLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrustScoreRow {
    pub user_id: Uuid,
    pub avg_teaching_rating: Option<f64>,
    pub avg_communication_rating: Option<f64>,
    pub avg_knowledge_rating: Option<f64>,
    pub overall_score: f64,
    pub total_reviews: i32,
    pub completed_sessions: i32,
    pub trust_level: String,
    pub last_calculated: DateTime<Utc>,
}

impl TrustScoreRow {
    /// Placeholder for users with no stored score yet.
    pub fn newbie(user_id: Uuid) -> Self {
        Self {
            user_id,
            avg_teaching_rating: None,
            avg_communication_rating: None,
            avg_knowledge_rating: None,
            overall_score: 0.0,
            total_reviews: 0,
            completed_sessions: 0,
            trust_level: TrustLevel::Newbie.as_str().to_string(),
            last_calculated: Utc::now(),
        }
    }

    pub fn level(&self) -> TrustLevel {
        TrustLevel::parse(&self.trust_level)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Aggregates received reviews in a single pass.
///
/// Teaching/communication/knowledge averages only count reviews where the user
/// was the teacher; the overall score averages every review.
pub fn compute_trust_score(reviews: &[ReviewRatings], completed_sessions: i64) -> TrustSummary {
    let mut teaching = 0i64;
    let mut communication = 0i64;
    let mut knowledge = 0i64;
    let mut as_teacher = 0i64;
    let mut overall = 0i64;

    for r in reviews {
        overall += i64::from(r.overall_rating);
        if r.is_teacher_review {
            teaching += i64::from(r.teaching_rating);
            communication += i64::from(r.communication_rating);
            knowledge += i64::from(r.knowledge_rating);
            as_teacher += 1;
        }
    }

    let avg = |sum: i64| (as_teacher > 0).then(|| round2(sum as f64 / as_teacher as f64));
    let overall_score = if reviews.is_empty() {
        0.0
    } else {
        round2(overall as f64 / reviews.len() as f64)
    };

    TrustSummary {
        avg_teaching_rating: avg(teaching),
        avg_communication_rating: avg(communication),
        avg_knowledge_rating: avg(knowledge),
        overall_score,
        total_reviews: reviews.len() as i32,
        completed_sessions: completed_sessions.clamp(0, i32::MAX as i64) as i32,
        trust_level: TrustLevel::for_record(completed_sessions, overall_score),
    }
}

/// Recomputes and upserts the stored trust score for `user_id`. Callers pass
/// the transaction holding the write that changed the user's standing.
pub async fn recalculate(conn: &mut PgConnection, user_id: Uuid) -> Result<TrustScoreRow> {
    let reviews = sqlx::query_as::<_, ReviewRatings>(
        r#"
        SELECT teaching_rating, communication_rating, knowledge_rating,
               overall_rating, is_teacher_review
        FROM peer_reviews
        WHERE reviewee_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    let completed: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM skill_swap_sessions WHERE teacher_id = $1 AND status = 'completed'",
    )
    .bind(user_id)
    .fetch_one(&mut *conn)
    .await?;

    let summary = compute_trust_score(&reviews, completed);

    let row = sqlx::query_as::<_, TrustScoreRow>(
        r#"
        INSERT INTO trust_scores
            (user_id, avg_teaching_rating, avg_communication_rating, avg_knowledge_rating,
             overall_score, total_reviews, completed_sessions, trust_level, last_calculated)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
        ON CONFLICT (user_id) DO UPDATE SET
            avg_teaching_rating = EXCLUDED.avg_teaching_rating,
            avg_communication_rating = EXCLUDED.avg_communication_rating,
            avg_knowledge_rating = EXCLUDED.avg_knowledge_rating,
            overall_score = EXCLUDED.overall_score,
            total_reviews = EXCLUDED.total_reviews,
            completed_sessions = EXCLUDED.completed_sessions,
            trust_level = EXCLUDED.trust_level,
            last_calculated = EXCLUDED.last_calculated,
            updated_at = now()
        RETURNING user_id, avg_teaching_rating, avg_communication_rating, avg_knowledge_rating,
                  overall_score, total_reviews, completed_sessions, trust_level, last_calculated
        "#,
    )
    .bind(user_id)
    .bind(summary.avg_teaching_rating)
    .bind(summary.avg_communication_rating)
    .bind(summary.avg_knowledge_rating)
    .bind(summary.overall_score)
    .bind(summary.total_reviews)
    .bind(summary.completed_sessions)
    .bind(summary.trust_level.as_str())
    .fetch_one(&mut *conn)
    .await?;

    info!(
        "Recalculated trust for user {user_id}: {} ({:.2} over {} reviews, {} sessions)",
        row.trust_level, row.overall_score, row.total_reviews, row.completed_sessions
    );

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(t: i32, c: i32, k: i32, o: i32, is_teacher_review: bool) -> ReviewRatings {
        ReviewRatings {
            teaching_rating: t,
            communication_rating: c,
            knowledge_rating: k,
            overall_rating: o,
            is_teacher_review,
        }
    }

    #[test]
    fn test_no_reviews_is_newbie_with_zero_score() {
        let s = compute_trust_score(&[], 0);
        assert_eq!(s.overall_score, 0.0);
        assert_eq!(s.total_reviews, 0);
        assert!(s.avg_teaching_rating.is_none());
        assert_eq!(s.trust_level, TrustLevel::Newbie);
    }

    #[test]
    fn test_averages_only_count_teacher_reviews() {
        let reviews = vec![
            review(5, 4, 3, 5, true),
            review(3, 4, 5, 4, true),
            review(1, 1, 1, 3, false),
        ];
        let s = compute_trust_score(&reviews, 0);
        assert_eq!(s.avg_teaching_rating, Some(4.0));
        assert_eq!(s.avg_communication_rating, Some(4.0));
        assert_eq!(s.avg_knowledge_rating, Some(4.0));
        assert_eq!(s.overall_score, 4.0);
        assert_eq!(s.total_reviews, 3);
    }

    #[test]
    fn test_overall_score_rounded_to_two_decimals() {
        let reviews = vec![
            review(5, 5, 5, 5, true),
            review(5, 5, 5, 4, true),
            review(5, 5, 5, 4, true),
        ];
        let s = compute_trust_score(&reviews, 0);
        assert_eq!(s.overall_score, 4.33);
    }

    #[test]
    fn test_level_requires_both_sessions_and_score() {
        assert_eq!(TrustLevel::for_record(100, 3.0), TrustLevel::Newbie);
        assert_eq!(TrustLevel::for_record(2, 5.0), TrustLevel::Newbie);
        assert_eq!(TrustLevel::for_record(3, 3.5), TrustLevel::Bronze);
        assert_eq!(TrustLevel::for_record(10, 4.0), TrustLevel::Silver);
        assert_eq!(TrustLevel::for_record(30, 4.6), TrustLevel::Gold);
        assert_eq!(TrustLevel::for_record(50, 4.8), TrustLevel::Platinum);
    }

    #[test]
    fn test_high_score_few_sessions_caps_level() {
        // Gold-worthy rating but only silver-worthy volume.
        assert_eq!(TrustLevel::for_record(12, 4.9), TrustLevel::Silver);
    }

    #[test]
    fn test_level_string_round_trip_defaults_to_newbie() {
        assert_eq!(TrustLevel::parse("gold"), TrustLevel::Gold);
        assert_eq!(TrustLevel::parse("diamond"), TrustLevel::Newbie);
        assert_eq!(TrustLevel::Platinum.label(), "Platinum Expert");
    }

    #[test]
    fn test_summary_carries_session_count_into_level() {
        let reviews: Vec<_> = (0..10).map(|_| review(5, 5, 5, 5, true)).collect();
        let s = compute_trust_score(&reviews, 26);
        assert_eq!(s.completed_sessions, 26);
        assert_eq!(s.trust_level, TrustLevel::Gold);
    }
}
