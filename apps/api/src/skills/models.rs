use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Pending => "pending",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillOfferingRow {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub skill_name: String,
    pub skill_category: String,
    pub target_role: String,
    pub description: String,
    pub level: String,
    pub prerequisites: Option<String>,
    pub duration_minutes: i32,
    pub max_learners: i32,
    pub quiz_passed: bool,
    pub demo_video_url: Option<String>,
    pub demo_video_approved: bool,
    pub approval_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillQuizRow {
    pub id: Uuid,
    pub skill_category: String,
    pub skill_level: String,
    pub questions: Value,
    pub passing_score: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizAttemptRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quiz_id: Uuid,
    pub skill_offering_id: Option<Uuid>,
    pub answers: Value,
    pub score: i32,
    pub passed: bool,
    pub time_taken_seconds: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRequestRow {
    pub id: Uuid,
    pub skill_offering_id: Uuid,
    pub requester_id: Uuid,
    pub message: Option<String>,
    pub requested_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillSwapSessionRow {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub learner_id: Uuid,
    pub skill_taught: String,
    pub session_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkillSwapSessionRow {
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.teacher_id == user_id || self.learner_id == user_id
    }

    /// The other participant, if `user_id` took part at all.
    pub fn counterpart(&self, user_id: Uuid) -> Option<Uuid> {
        if user_id == self.teacher_id {
            Some(self.learner_id)
        } else if user_id == self.learner_id {
            Some(self.teacher_id)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PeerReviewRow {
    pub id: Uuid,
    pub session_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewee_id: Uuid,
    pub teaching_rating: i32,
    pub communication_rating: i32,
    pub knowledge_rating: i32,
    pub overall_rating: i32,
    pub written_feedback: Option<String>,
    pub is_teacher_review: bool,
    pub created_at: DateTime<Utc>,
}
