use std::sync::Arc;

use sqlx::PgPool;

use crate::career::CareerCatalog;
use crate::config::Config;
use crate::interview::{InterviewCoach, QuizCache};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Cache for generated quiz questions.
    pub quiz_cache: QuizCache,
    pub config: Config,
    /// Validated once at startup; read-only afterwards.
    pub catalog: Arc<CareerCatalog>,
    /// Pluggable interview backend. Default: LlmInterviewCoach.
    pub coach: Arc<dyn InterviewCoach>,
}
