//! Axum route handlers for the mock-interview trainer.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::bank::{questions_for, InterviewQuestion};
use crate::interview::cache;
use crate::interview::coach::{
    AnswerContext, AudioClip, GeneratedQuestion, InterviewAnalysis, QuizTopic,
    DEFAULT_DIFFICULTY,
};
use crate::skills::quiz::QuizQuestion;
use crate::state::AppState;

/// Largest recording accepted for analysis.
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;
const DEFAULT_AUDIO_MIME: &str = "audio/webm";
const DEFAULT_AUDIO_FILENAME: &str = "audio.webm";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionBankResponse {
    pub role: String,
    pub questions: &'static [InterviewQuestion],
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionRequest {
    pub role: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizQuestionRequest {
    pub skill_category: Option<String>,
    pub skill_level: Option<String>,
    pub target_role: Option<String>,
    pub question_number: Option<u32>,
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

impl QuizQuestionRequest {
    pub fn into_topic(self) -> Result<QuizTopic, AppError> {
        Ok(QuizTopic {
            category: required(self.skill_category, "skill_category")?,
            level: required(self.skill_level, "skill_level")?,
            target_role: required(self.target_role, "target_role")?,
            number: self.question_number.unwrap_or(1).max(1),
        })
    }
}

/// Fields collected from the analysis upload, before validation.
#[derive(Debug, Default)]
pub struct AnalysisForm {
    pub audio: Option<AudioClip>,
    pub question: Option<String>,
    pub role: Option<String>,
    pub ideal_answer: Option<String>,
}

impl AnalysisForm {
    pub fn validate(self) -> Result<(AudioClip, AnswerContext), AppError> {
        let audio = self
            .audio
            .filter(|a| !a.bytes.is_empty())
            .ok_or_else(|| AppError::Validation("audio is required".to_string()))?;
        if audio.bytes.len() > MAX_AUDIO_BYTES {
            return Err(AppError::PayloadTooLarge(format!(
                "Recording exceeds {} MB",
                MAX_AUDIO_BYTES / (1024 * 1024)
            )));
        }
        let context = AnswerContext {
            question: required(self.question, "question")?,
            role: required(self.role, "role")?,
            ideal_answer: required(self.ideal_answer, "ideal_answer")?,
        };
        Ok((audio, context))
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}

async fn read_analysis_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => {
                let filename = field
                    .file_name()
                    .unwrap_or(DEFAULT_AUDIO_FILENAME)
                    .to_string();
                let mime = field
                    .content_type()
                    .unwrap_or(DEFAULT_AUDIO_MIME)
                    .to_string();
                let bytes: Bytes = field.bytes().await.map_err(multipart_error)?;
                form.audio = Some(AudioClip {
                    bytes,
                    filename,
                    mime,
                });
            }
            "question" => form.question = Some(field.text().await.map_err(multipart_error)?),
            "role" => form.role = Some(field.text().await.map_err(multipart_error)?),
            "ideal_answer" | "idealAnswer" => {
                form.ideal_answer = Some(field.text().await.map_err(multipart_error)?)
            }
            _ => {}
        }
    }

    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/interview/questions?role=
pub async fn handle_question_bank(
    Query(query): Query<RoleQuery>,
) -> Result<Json<QuestionBankResponse>, AppError> {
    let questions = questions_for(&query.role)
        .ok_or_else(|| AppError::NotFound(format!("No interview questions for '{}'", query.role)))?;
    Ok(Json(QuestionBankResponse {
        role: query.role,
        questions,
    }))
}

/// POST /api/v1/interview/question
pub async fn handle_generate_question(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuestionRequest>,
) -> Result<Json<GeneratedQuestion>, AppError> {
    let role = required(req.role, "role")?;
    let difficulty = req
        .difficulty
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string());

    let generated = state.coach.generate_question(&role, &difficulty).await?;
    Ok(Json(generated))
}

/// POST /api/v1/interview/quiz-question
pub async fn handle_generate_quiz_question(
    State(state): State<AppState>,
    Json(req): Json<QuizQuestionRequest>,
) -> Result<Json<QuizQuestion>, AppError> {
    let topic = req.into_topic()?;
    let key = cache::quiz_cache_key(&topic);

    if let Some(hit) = state.quiz_cache.get_quiz_question(&key).await {
        return Ok(Json(hit));
    }

    let question = state.coach.generate_quiz_question(&topic).await?;
    state.quiz_cache.put_quiz_question(&key, &question).await;
    Ok(Json(question))
}

/// POST /api/v1/interview/analysis (multipart: audio, question, role, ideal_answer)
pub async fn handle_analyze_answer(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<InterviewAnalysis>, AppError> {
    let (audio, context) = read_analysis_form(multipart).await?.validate()?;
    let analysis = state.coach.analyze(audio, &context).await?;
    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(len: usize) -> AudioClip {
        AudioClip {
            bytes: Bytes::from(vec![0u8; len]),
            filename: DEFAULT_AUDIO_FILENAME.to_string(),
            mime: DEFAULT_AUDIO_MIME.to_string(),
        }
    }

    fn form(audio: Option<AudioClip>) -> AnalysisForm {
        AnalysisForm {
            audio,
            question: Some("Why this role?".to_string()),
            role: Some("Data Analyst".to_string()),
            ideal_answer: Some("Because I like data.".to_string()),
        }
    }

    #[test]
    fn test_analysis_form_requires_audio() {
        assert!(matches!(
            form(None).validate(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            form(Some(clip(0))).validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_analysis_form_rejects_oversized_audio() {
        assert!(matches!(
            form(Some(clip(MAX_AUDIO_BYTES + 1))).validate(),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_analysis_form_requires_text_fields() {
        let mut f = form(Some(clip(10)));
        f.ideal_answer = Some("   ".to_string());
        assert!(matches!(f.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_analysis_form_trims_fields() {
        let mut f = form(Some(clip(10)));
        f.role = Some("  Data Analyst ".to_string());
        let (audio, ctx) = f.validate().unwrap();
        assert_eq!(audio.bytes.len(), 10);
        assert_eq!(ctx.role, "Data Analyst");
    }

    #[test]
    fn test_quiz_request_defaults_question_number() {
        let req = QuizQuestionRequest {
            skill_category: Some("Design".to_string()),
            skill_level: Some("beginner".to_string()),
            target_role: Some("Web Designer".to_string()),
            question_number: None,
        };
        assert_eq!(req.into_topic().unwrap().number, 1);
    }

    #[test]
    fn test_quiz_request_requires_all_fields() {
        let req = QuizQuestionRequest {
            skill_category: Some("Design".to_string()),
            skill_level: None,
            target_role: Some("Web Designer".to_string()),
            question_number: Some(4),
        };
        assert!(matches!(req.into_topic(), Err(AppError::Validation(_))));
    }
}
