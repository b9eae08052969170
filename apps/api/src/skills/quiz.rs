//! Skill-validation quizzes: teachers must pass one before offering a skill.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TIME_LIMIT_SECONDS: i32 = 600;
pub const OPTIONS_PER_QUESTION: usize = 4;
/// Sentinel the client sends for a question left blank.
pub const UNANSWERED: i32 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// A question as shown to the person taking the quiz.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuizQuestion {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for PublicQuizQuestion {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    #[error("question {index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },
}

impl QuizQuestion {
    /// Four non-blank options, a non-blank prompt and an in-range answer key.
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(format!(
                "expected {OPTIONS_PER_QUESTION} options, got {}",
                self.options.len()
            ));
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err("an option is empty".to_string());
        }
        if self.correct >= self.options.len() {
            return Err(format!("correct index {} out of range", self.correct));
        }
        Ok(())
    }
}

/// Parses the stored JSON question list, rejecting malformed entries.
pub fn parse_questions(value: &serde_json::Value) -> Result<Vec<QuizQuestion>, QuizError> {
    let questions: Vec<QuizQuestion> =
        serde_json::from_value(value.clone()).map_err(|e| QuizError::Malformed {
            index: 0,
            reason: e.to_string(),
        })?;
    if questions.is_empty() {
        return Err(QuizError::Empty);
    }
    for (index, q) in questions.iter().enumerate() {
        q.validate()
            .map_err(|reason| QuizError::Malformed { index, reason })?;
    }
    Ok(questions)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizGrade {
    pub correct_answers: usize,
    pub total_questions: usize,
    pub score: i32,
    pub passed: bool,
    pub passing_score: i32,
}

/// Grades selected option indices against the answer key.
///
/// `score = round(correct / total × 100)`; unanswered (`-1`) and out-of-range
/// selections count as wrong.
pub fn grade(
    questions: &[QuizQuestion],
    answers: &[i32],
    passing_score: i32,
) -> Result<QuizGrade, QuizError> {
    if questions.is_empty() {
        return Err(QuizError::Empty);
    }
    if answers.len() != questions.len() {
        return Err(QuizError::AnswerCount {
            expected: questions.len(),
            got: answers.len(),
        });
    }

    let correct_answers = questions
        .iter()
        .zip(answers)
        .filter(|&(q, &a)| a != UNANSWERED && usize::try_from(a).ok() == Some(q.correct))
        .count();

    let score = ((correct_answers as f64 / questions.len() as f64) * 100.0).round() as i32;

    Ok(QuizGrade {
        correct_answers,
        total_questions: questions.len(),
        score,
        passed: score >= passing_score,
        passing_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEFAULT_PASSING_SCORE: i32 = 70;

    fn q(correct: usize) -> QuizQuestion {
        QuizQuestion {
            question: "Which hook manages local state?".to_string(),
            options: vec![
                "useState".to_string(),
                "useEffect".to_string(),
                "useMemo".to_string(),
                "useRef".to_string(),
            ],
            correct,
        }
    }

    #[test]
    fn test_all_correct_scores_100() {
        let questions = vec![q(0), q(1), q(2)];
        let g = grade(&questions, &[0, 1, 2], DEFAULT_PASSING_SCORE).unwrap();
        assert_eq!(g.correct_answers, 3);
        assert_eq!(g.score, 100);
        assert!(g.passed);
    }

    #[test]
    fn test_score_is_rounded_percentage() {
        let questions = vec![q(0), q(0), q(0)];
        // 2 of 3 → 66.67 → 67
        let g = grade(&questions, &[0, 0, 3], DEFAULT_PASSING_SCORE).unwrap();
        assert_eq!(g.score, 67);
        assert!(!g.passed);
    }

    #[test]
    fn test_unanswered_counts_as_wrong() {
        let questions = vec![q(0), q(1)];
        let g = grade(&questions, &[UNANSWERED, 1], 50).unwrap();
        assert_eq!(g.correct_answers, 1);
        assert_eq!(g.score, 50);
        assert!(g.passed);
    }

    #[test]
    fn test_answer_count_mismatch_rejected() {
        let err = grade(&[q(0), q(1)], &[0], DEFAULT_PASSING_SCORE).unwrap_err();
        assert_eq!(err, QuizError::AnswerCount { expected: 2, got: 1 });
    }

    #[test]
    fn test_empty_quiz_rejected() {
        assert_eq!(grade(&[], &[], 70).unwrap_err(), QuizError::Empty);
    }

    #[test]
    fn test_passing_threshold_is_inclusive() {
        let questions: Vec<_> = (0..10).map(|_| q(1)).collect();
        let answers = [1, 1, 1, 1, 1, 1, 1, 0, 0, 0];
        let g = grade(&questions, &answers, 70).unwrap();
        assert_eq!(g.score, 70);
        assert!(g.passed);
    }

    #[test]
    fn test_validate_requires_four_options_and_valid_key() {
        assert!(q(3).validate().is_ok());
        assert!(q(4).validate().is_err());

        let mut three = q(0);
        three.options.pop();
        assert!(three.validate().is_err());
    }

    #[test]
    fn test_parse_questions_rejects_bad_entry() {
        let value = json!([
            { "question": "Q1", "options": ["a", "b", "c", "d"], "correct": 0 },
            { "question": "Q2", "options": ["a", "b"], "correct": 1 }
        ]);
        let err = parse_questions(&value).unwrap_err();
        assert!(matches!(err, QuizError::Malformed { index: 1, .. }));
    }

    #[test]
    fn test_public_question_hides_answer_key() {
        let public = PublicQuizQuestion::from(&q(2));
        let value = serde_json::to_value(&public).unwrap();
        assert!(value.get("correct").is_none());
        assert_eq!(value["options"].as_array().unwrap().len(), 4);
    }
}
