//! Career assessment questions and the typed answer model.
//!
//! Answers arrive from the client as loose strings, one per question. They are
//! parsed once at the boundary into `OptionId`s; anything unrecognised becomes
//! an unanswered slot instead of an error, so a quiz can never "break".

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The fixed assessment, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    ExperienceLevel,
    WorkEnvironment,
    SkillFocus,
    CareerDriver,
    LearningStyle,
    DomainInterest,
    WorkLifeBalance,
    RiskAppetite,
    TeamRole,
    FiveYearGoal,
}

impl Question {
    pub const COUNT: usize = 10;

    pub const ALL: [Question; Question::COUNT] = [
        Question::ExperienceLevel,
        Question::WorkEnvironment,
        Question::SkillFocus,
        Question::CareerDriver,
        Question::LearningStyle,
        Question::DomainInterest,
        Question::WorkLifeBalance,
        Question::RiskAppetite,
        Question::TeamRole,
        Question::FiveYearGoal,
    ];

    /// Position of the question in the assessment (and in an `AnswerVector`).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Question::ExperienceLevel => "What is your current education or experience level?",
            Question::WorkEnvironment => "What type of work environment motivates you most?",
            Question::SkillFocus => "Which skill would you most like to develop?",
            Question::CareerDriver => "What drives you most in your career?",
            Question::LearningStyle => "How do you prefer to learn new skills?",
            Question::DomainInterest => "Which IT domain interests you most?",
            Question::WorkLifeBalance => "What's your ideal work-life balance?",
            Question::RiskAppetite => "How comfortable are you with taking risks?",
            Question::TeamRole => "What role do you see yourself playing in a team?",
            Question::FiveYearGoal => "Where do you want to be in five years?",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Question::ExperienceLevel => &[
                "Still in school or college",
                "Recent graduate with 0-2 years of experience",
                "Professional with 3-7 years of experience",
                "Senior professional with 8+ years of experience",
            ],
            Question::WorkEnvironment => &[
                "Collaborative team settings",
                "Independent, remote work",
                "Fast-paced startup environment",
                "Structured, organized workplaces",
            ],
            Question::SkillFocus => &[
                "Leadership and management",
                "Technical and analytical",
                "Creative problem solving",
                "Communication and interpersonal",
            ],
            Question::CareerDriver => &[
                "Building something of my own",
                "Solving complex problems",
                "Financial security",
                "Helping people",
            ],
            Question::LearningStyle => &[
                "Hands-on practice",
                "Reading and research",
                "Collaborative learning",
                "Structured courses",
            ],
            Question::DomainInterest => &[
                "Software development and programming",
                "Data and analytics",
                "Cloud and infrastructure",
                "Cybersecurity",
                "Technical support and troubleshooting",
                "Business and product strategy",
            ],
            Question::WorkLifeBalance => &[
                "Flexible hours, remote work",
                "Standard 9-5 schedule",
                "Project-based with breaks",
                "Intensive periods with time off",
            ],
            Question::RiskAppetite => &[
                "I thrive on high risk and high reward",
                "Calculated risks are fine",
                "I prefer stability",
            ],
            Question::TeamRole => &[
                "The visionary who sets direction",
                "The leader who grows people",
                "The expert who designs systems",
                "The builder who ships features",
                "The guardian who keeps things running",
            ],
            Question::FiveYearGoal => &[
                "Running my own company",
                "Leading a technology organisation",
                "Recognised as a technical specialist",
                "Advising many different clients",
            ],
        }
    }

    /// Resolves an option string to its id. Exact match only.
    pub fn option_id(self, text: &str) -> Option<OptionId> {
        self.options()
            .iter()
            .position(|o| *o == text)
            .map(|i| OptionId(i as u8))
    }

    pub fn option_text(self, id: OptionId) -> Option<&'static str> {
        self.options().get(id.0 as usize).copied()
    }
}

/// Index of an option within one question. Only produced by `Question::option_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(u8);

/// One slot per question; `None` means unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerVector {
    slots: [Option<OptionId>; Question::COUNT],
}

impl AnswerVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses positional answer strings. Blank, null and unknown entries are
    /// left unanswered; entries past the last question are ignored.
    pub fn from_raw(raw: &[Option<String>]) -> Self {
        if raw.len() > Question::COUNT {
            debug!(
                "Ignoring {} answers beyond the last question",
                raw.len() - Question::COUNT
            );
        }

        let mut answers = Self::new();
        for (question, value) in Question::ALL.iter().zip(raw) {
            if let Some(text) = value.as_deref() {
                answers.answer(*question, text);
            }
        }
        answers
    }

    /// Records (or replaces) a single answer. Returns false when the text is
    /// not one of the question's options, in which case the slot is cleared.
    pub fn answer(&mut self, question: Question, text: &str) -> bool {
        let id = question.option_id(text.trim());
        if id.is_none() && !text.trim().is_empty() {
            debug!("Unrecognised answer for {:?}: {:?}", question, text);
        }
        self.slots[question.index()] = id;
        id.is_some()
    }

    pub fn get(&self, question: Question) -> Option<OptionId> {
        self.slots[question.index()]
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Answers back in their canonical string form, for storage.
    pub fn to_raw(&self) -> Vec<Option<String>> {
        Question::ALL
            .iter()
            .map(|q| {
                self.get(*q)
                    .and_then(|id| q.option_text(id))
                    .map(String::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_indices_follow_declaration_order() {
        for (i, q) in Question::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
        assert_eq!(Question::DomainInterest.index(), 5);
    }

    #[test]
    fn test_options_are_unique_per_question() {
        for q in Question::ALL {
            let mut opts = q.options().to_vec();
            opts.sort();
            opts.dedup();
            assert_eq!(opts.len(), q.options().len(), "{q:?} has duplicate options");
        }
    }

    #[test]
    fn test_from_raw_skips_unknown_and_blank() {
        let raw = vec![
            Some("Recent graduate with 0-2 years of experience".to_string()),
            Some("Something nobody offered".to_string()),
            None,
            Some("".to_string()),
        ];
        let answers = AnswerVector::from_raw(&raw);
        assert_eq!(answers.answered(), 1);
        assert!(answers.get(Question::ExperienceLevel).is_some());
        assert!(answers.get(Question::WorkEnvironment).is_none());
    }

    #[test]
    fn test_from_raw_ignores_trailing_extras() {
        let mut raw: Vec<Option<String>> = vec![None; Question::COUNT];
        raw.push(Some("Cybersecurity".to_string()));
        let answers = AnswerVector::from_raw(&raw);
        assert_eq!(answers.answered(), 0);
    }

    #[test]
    fn test_answer_trims_whitespace() {
        let mut answers = AnswerVector::new();
        assert!(answers.answer(Question::DomainInterest, "  Cybersecurity "));
        assert_eq!(
            answers.to_raw()[5].as_deref(),
            Some("Cybersecurity")
        );
    }

    #[test]
    fn test_answer_with_unknown_text_clears_slot() {
        let mut answers = AnswerVector::new();
        answers.answer(Question::RiskAppetite, "I prefer stability");
        assert!(!answers.answer(Question::RiskAppetite, "no idea"));
        assert!(answers.get(Question::RiskAppetite).is_none());
    }
}
