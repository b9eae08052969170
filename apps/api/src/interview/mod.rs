// Mock-interview trainer: curated question bank, AI question generation and
// analysis of recorded answers.

pub mod bank;
pub mod cache;
pub mod coach;
pub mod handlers;
pub mod prompts;

pub use cache::QuizCache;
pub use coach::{InterviewCoach, LlmInterviewCoach};
