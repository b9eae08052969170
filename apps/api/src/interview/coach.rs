//! Interview coach: pluggable, trait-based backend for AI question generation
//! and spoken-answer analysis.
//!
//! Production: `LlmInterviewCoach` (chat completions + speech transcription).
//! `AppState` holds an `Arc<dyn InterviewCoach>` so tests can swap in a stub.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::prompts::{
    render, ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM, QUESTION_SYSTEM_TEMPLATE,
    QUESTION_USER_TEMPLATE, QUIZ_SYSTEM_TEMPLATE, QUIZ_USER_TEMPLATE,
};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{ChatOptions, LlmClient, ANALYSIS_MODEL, CHAT_MODEL};
use crate::skills::quiz::QuizQuestion;

pub const DEFAULT_DIFFICULTY: &str = "intermediate";

const QUESTION_OPTIONS: ChatOptions = ChatOptions {
    model: CHAT_MODEL,
    temperature: 0.7,
    max_tokens: 800,
};

const QUIZ_OPTIONS: ChatOptions = ChatOptions {
    model: CHAT_MODEL,
    temperature: 0.7,
    max_tokens: 500,
};

const ANALYSIS_OPTIONS: ChatOptions = ChatOptions {
    model: ANALYSIS_MODEL,
    temperature: 0.3,
    max_tokens: 1000,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    #[serde(alias = "idealAnswer")]
    pub ideal_answer: String,
}

/// What a generated quiz question should test.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizTopic {
    pub category: String,
    pub level: String,
    pub target_role: String,
    pub number: u32,
}

/// A recorded spoken answer.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub bytes: Bytes,
    pub filename: String,
    pub mime: String,
}

/// The question an answer was given to.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerContext {
    pub question: String,
    pub role: String,
    pub ideal_answer: String,
}

/// Analysis exactly as the model returns it; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAnalysis {
    pub overall_score: Option<f64>,
    pub tone: Option<String>,
    pub clarity: Option<String>,
    pub pronunciation: Option<String>,
    pub feedback: Option<String>,
    pub corrections: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewAnalysis {
    pub overall_score: u8,
    pub tone: String,
    pub clarity: String,
    pub pronunciation: String,
    /// Always the transcript, never the model's paraphrase.
    pub user_answer: String,
    pub feedback: String,
    pub corrections: String,
}

impl InterviewAnalysis {
    /// Normalizes model output: score rounded and clamped to 0–100, missing
    /// text fields become empty strings.
    pub fn from_raw(raw: RawAnalysis, transcript: String) -> Self {
        let score = raw
            .overall_score
            .filter(|s| s.is_finite())
            .unwrap_or(0.0)
            .round()
            .clamp(0.0, 100.0) as u8;
        Self {
            overall_score: score,
            tone: raw.tone.unwrap_or_default(),
            clarity: raw.clarity.unwrap_or_default(),
            pronunciation: raw.pronunciation.unwrap_or_default(),
            user_answer: transcript,
            feedback: raw.feedback.unwrap_or_default(),
            corrections: raw.corrections.unwrap_or_default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap backends without touching handlers.
#[async_trait]
pub trait InterviewCoach: Send + Sync {
    async fn generate_question(
        &self,
        role: &str,
        difficulty: &str,
    ) -> Result<GeneratedQuestion, AppError>;

    /// The returned question has already passed `QuizQuestion::validate`.
    async fn generate_quiz_question(&self, topic: &QuizTopic) -> Result<QuizQuestion, AppError>;

    /// Transcribes `audio` and grades the answer against `context.ideal_answer`.
    async fn analyze(
        &self,
        audio: AudioClip,
        context: &AnswerContext,
    ) -> Result<InterviewAnalysis, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmInterviewCoach: production implementation
// ────────────────────────────────────────────────────────────────────────────

fn json_only(prompt: String) -> String {
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

pub struct LlmInterviewCoach {
    llm: LlmClient,
}

impl LlmInterviewCoach {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl InterviewCoach for LlmInterviewCoach {
    async fn generate_question(
        &self,
        role: &str,
        difficulty: &str,
    ) -> Result<GeneratedQuestion, AppError> {
        let vars = [("role", role), ("difficulty", difficulty)];
        let generated: GeneratedQuestion = self
            .llm
            .call_json(
                &json_only(render(QUESTION_SYSTEM_TEMPLATE, &vars)),
                &render(QUESTION_USER_TEMPLATE, &vars),
                QUESTION_OPTIONS,
            )
            .await?;

        info!("Generated interview question for role: {role} ({difficulty})");
        Ok(generated)
    }

    async fn generate_quiz_question(&self, topic: &QuizTopic) -> Result<QuizQuestion, AppError> {
        let number = topic.number.to_string();
        let vars = [
            ("category", topic.category.as_str()),
            ("level", topic.level.as_str()),
            ("role", topic.target_role.as_str()),
            ("number", number.as_str()),
        ];
        let question: QuizQuestion = self
            .llm
            .call_json(
                &json_only(render(QUIZ_SYSTEM_TEMPLATE, &vars)),
                &render(QUIZ_USER_TEMPLATE, &vars),
                QUIZ_OPTIONS,
            )
            .await?;

        if let Err(reason) = question.validate() {
            warn!("Rejected generated quiz question: {reason}");
            return Err(AppError::Llm(format!(
                "Invalid question format received: {reason}"
            )));
        }

        info!(
            "Generated quiz question #{} for {} ({}) - {}",
            topic.number, topic.category, topic.level, topic.target_role
        );
        Ok(question)
    }

    async fn analyze(
        &self,
        audio: AudioClip,
        context: &AnswerContext,
    ) -> Result<InterviewAnalysis, AppError> {
        let transcript = self
            .llm
            .transcribe(audio.bytes, &audio.filename, &audio.mime)
            .await?;

        if transcript.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "No speech was detected in the recording".to_string(),
            ));
        }

        let prompt = json_only(render(
            ANALYSIS_PROMPT_TEMPLATE,
            &[
                ("question", context.question.as_str()),
                ("role", context.role.as_str()),
                ("ideal_answer", context.ideal_answer.as_str()),
                ("answer", transcript.as_str()),
            ],
        ));
        let raw: RawAnalysis = self
            .llm
            .call_json(ANALYSIS_SYSTEM, &prompt, ANALYSIS_OPTIONS)
            .await?;

        let analysis = InterviewAnalysis::from_raw(raw, transcript);
        info!(
            "Analysis complete for role: {} (score {})",
            context.role, analysis.overall_score
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_question_accepts_camel_case() {
        let q: GeneratedQuestion = serde_json::from_str(
            r#"{"question":"Why DevOps?","idealAnswer":"Because automation."}"#,
        )
        .unwrap();
        assert_eq!(q.ideal_answer, "Because automation.");

        let out = serde_json::to_value(&q).unwrap();
        assert_eq!(out["ideal_answer"], "Because automation.");
    }

    #[test]
    fn test_analysis_score_clamped_and_rounded() {
        let raw = RawAnalysis {
            overall_score: Some(112.4),
            ..Default::default()
        };
        assert_eq!(InterviewAnalysis::from_raw(raw, String::new()).overall_score, 100);

        let raw = RawAnalysis {
            overall_score: Some(-5.0),
            ..Default::default()
        };
        assert_eq!(InterviewAnalysis::from_raw(raw, String::new()).overall_score, 0);

        let raw = RawAnalysis {
            overall_score: Some(84.6),
            ..Default::default()
        };
        assert_eq!(InterviewAnalysis::from_raw(raw, String::new()).overall_score, 85);
    }

    #[test]
    fn test_analysis_user_answer_is_transcript() {
        let raw: RawAnalysis = serde_json::from_str(
            r#"{"overallScore":72,"tone":"Professional","clarity":"Good",
                "pronunciation":"Clear","userAnswer":"paraphrased by model",
                "feedback":"Solid","corrections":"Mention metrics"}"#,
        )
        .unwrap();
        let a = InterviewAnalysis::from_raw(raw, "what I actually said".to_string());
        assert_eq!(a.user_answer, "what I actually said");
        assert_eq!(a.overall_score, 72);
        assert_eq!(a.tone, "Professional");
        assert_eq!(a.corrections, "Mention metrics");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw: RawAnalysis = serde_json::from_str("{}").unwrap();
        let a = InterviewAnalysis::from_raw(raw, "hi".to_string());
        assert_eq!(a.overall_score, 0);
        assert!(a.feedback.is_empty());
    }
}
